//! GUI module using iced
//!
//! Single-screen form: language pair, text box, analyze button, result area.

use iced::widget::{button, column, container, pick_list, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Task, Theme};
use std::sync::Arc;
use tracing::{info, warn};

use crate::analysis::{AnalysisRequest, AnalysisResult, Sentiment, Workflow};
use crate::config::Config;
use crate::history;
use crate::language::Language;
use crate::sentiment;
use crate::translate;
use crate::tts;

/// Main application state
pub struct MoodLensApp {
    /// Text box contents
    input: String,
    /// Selected source language
    source: Language,
    /// Selected target language
    target: Language,
    /// Is a submission in flight
    analyzing: bool,
    /// Status message
    status: String,
    /// Last completed analysis, for the result area
    last: Option<(AnalysisRequest, AnalysisResult)>,
    /// Analysis workflow with injected capabilities
    workflow: Workflow,
    /// Translator health (None = not checked yet)
    translator_status: Option<bool>,
    /// Configuration
    config: Config,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    SourceSelected(Language),
    TargetSelected(Language),
    AnalyzePressed,
    AnalysisComplete(AnalysisRequest, AnalysisResult),
    TtsReady(Arc<dyn tts::TtsEngine>),
    TtsFailed,
    TranslatorHealth(bool),
}

impl MoodLensApp {
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::load().unwrap_or_default();

        let mut workflow = Workflow::new();
        if let Some(scorer) = sentiment::create_scorer(&config) {
            workflow.set_scorer(scorer);
        }
        let translator = translate::create_translator(&config);
        if let Some(t) = &translator {
            workflow.set_translator(t.clone());
        }

        info!("🚀 MoodLens app initialized");

        let mut tasks = Vec::new();

        // Initialize TTS in background based on config
        if config.speak_results {
            tasks.push(Task::perform(
                tts::create_engine(config.clone()),
                |res| match res {
                    Ok(engine) => Message::TtsReady(engine),
                    Err(_) => Message::TtsFailed,
                },
            ));
        }

        // Probe the translation backend so the status line can show it
        if let Some(t) = translator {
            tasks.push(Task::perform(
                async move { t.health_check().await },
                Message::TranslatorHealth,
            ));
        }

        let app = Self {
            input: String::new(),
            source: config.default_source_language,
            target: config.default_target_language,
            analyzing: false,
            status: "Ready".to_string(),
            last: None,
            workflow,
            translator_status: None,
            config,
        };

        (app, Task::batch(tasks))
    }

    pub fn title(&self) -> String {
        "MoodLens - Sentiment Analyzer".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
            }
            Message::SourceSelected(lang) => {
                self.source = lang;
            }
            Message::TargetSelected(lang) => {
                self.target = lang;
            }
            Message::AnalyzePressed => {
                if self.analyzing {
                    return Task::none();
                }

                let request = match AnalysisRequest::new(&self.input, self.source, self.target) {
                    Ok(request) => request,
                    Err(e) => {
                        // The one user-visible validation error
                        self.status = e.to_string();
                        return Task::none();
                    }
                };

                self.analyzing = true;
                self.status = "Analyzing... Please wait".to_string();

                let workflow = self.workflow.clone();
                return Task::perform(
                    async move {
                        let result = workflow.run(&request).await;
                        (request, result)
                    },
                    |(request, result)| Message::AnalysisComplete(request, result),
                );
            }
            Message::AnalysisComplete(request, result) => {
                self.analyzing = false;
                self.status = "Analysis Complete!".to_string();

                if self.config.history_enabled {
                    history::log(&request, &result).ok();
                }
                self.last = Some((request, result));
            }
            Message::TtsReady(engine) => {
                info!("🔊 TTS ready: {}", engine.name());
                self.workflow.set_tts(engine);
            }
            Message::TtsFailed => {
                warn!("🔇 TTS unavailable, results will be silent");
            }
            Message::TranslatorHealth(healthy) => {
                self.translator_status = Some(healthy);
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let title = text("📊 Sentiment Analyzer").size(26);

        let language_row = row![
            column![
                text("Source Language:").size(14),
                pick_list(Language::ALL, Some(self.source), Message::SourceSelected)
                    .width(Length::Fill),
            ]
            .spacing(5)
            .width(Length::Fill),
            column![
                text("Target Language:").size(14),
                pick_list(Language::ALL, Some(self.target), Message::TargetSelected)
                    .width(Length::Fill),
            ]
            .spacing(5)
            .width(Length::Fill),
        ]
        .spacing(15);

        let input = text_input("Type or paste text here...", &self.input)
            .on_input(Message::InputChanged)
            .padding(12)
            .size(16);

        let analyze_btn = button(text("🔍 ANALYZE SENTIMENT").size(16))
            .width(Length::Fill)
            .padding(12)
            .style(if self.analyzing {
                button::secondary
            } else {
                button::success
            })
            .on_press_maybe(if self.analyzing {
                None
            } else {
                Some(Message::AnalyzePressed)
            });

        let status_line = row![
            text(&self.status).size(16),
            Space::with_width(Length::Fill),
            self.capability_badges(),
        ]
        .align_y(Alignment::Center);

        let result_area = container(self.view_result())
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(15)
            .style(container::rounded_box);

        let content = column![
            title,
            Space::with_height(10),
            language_row,
            input,
            analyze_btn,
            status_line,
            result_area,
        ]
        .spacing(15)
        .padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn capability_badges(&self) -> Element<'_, Message> {
        let translate_badge = match self.translator_status {
            Some(true) => text("🌐 translate").size(12).style(text::success),
            Some(false) => text("🌐 offline").size(12).style(text::danger),
            None => text("🌐 ...").size(12).style(text::secondary),
        };

        let tts_badge = if self.workflow.has_tts() {
            text("🔊 speech").size(12).style(text::success)
        } else {
            text("🔇 silent").size(12).style(text::secondary)
        };

        row![translate_badge, tts_badge].spacing(10).into()
    }

    fn view_result(&self) -> Element<'_, Message> {
        let Some((request, result)) = &self.last else {
            return container(text("Result will appear here...").style(text::secondary))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        };

        // Right-align the echoed input for RTL source languages
        let echoed = container(text(format!("📝 {}", request.text)).size(16)).width(Length::Fill);
        let echoed = if request.source.is_rtl() {
            echoed.align_x(iced::alignment::Horizontal::Right)
        } else {
            echoed
        };

        column![
            echoed,
            Space::with_height(10),
            text(format!("🌐 Source: {}", request.source)).size(14),
            text(format!("🌍 Target: {}", request.target)).size(14),
            Space::with_height(10),
            text(format!(
                "⭐ Sentiment: {} {}",
                result.sentiment,
                sentiment_emoji(result.sentiment)
            ))
            .size(22),
            text(format!("🔍 Confidence: {:.0}%", result.confidence * 100.0)).size(16),
        ]
        .spacing(5)
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn scale_factor(&self) -> f64 {
        self.config.gui_scaling
    }
}

fn sentiment_emoji(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "😊",
        Sentiment::Negative => "😔",
        Sentiment::Neutral => "😐",
    }
}
