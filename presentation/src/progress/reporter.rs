//! Progress reporting for survey submission

use crate::view;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use tripmate_application::{ResultSource, SubmissionProgress};
use tripmate_domain::RecommendationResult;

/// Spinner shown while recommendations are generated
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn source_label(source: ResultSource) -> &'static str {
        match source {
            ResultSource::Remote => "추천 서비스",
            ResultSource::LocalFallback => "기본 추천",
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.spinner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionProgress for ProgressReporter {
    fn on_request_start(&self, location: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("맞춤 추천을 생성하고 있어요");
        pb.set_message(format!("({})", location));
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.lock() = Some(pb);
    }

    fn on_fallback(&self, _reason: &str) {
        if let Some(pb) = self.lock().as_ref() {
            pb.set_message("기본 추천으로 전환합니다".yellow().to_string());
        }
    }

    fn on_complete(&self, result: &RecommendationResult, source: ResultSource) {
        if let Some(pb) = self.lock().take() {
            pb.finish_with_message(format!(
                "{} {}곳 ({})",
                "v".green(),
                result.places.len(),
                Self::source_label(source)
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SubmissionProgress for SimpleProgress {
    fn on_request_start(&self, location: &str) {
        println!(
            "{} {} ({})",
            "->".cyan(),
            view::submit_label(true).bold(),
            location
        );
    }

    fn on_fallback(&self, reason: &str) {
        println!("  {} 기본 추천으로 전환합니다: {}", "!".yellow(), reason);
    }

    fn on_complete(&self, result: &RecommendationResult, source: ResultSource) {
        println!(
            "  {} {}곳 ({})",
            "v".green(),
            result.places.len(),
            ProgressReporter::source_label(source)
        );
        println!();
    }
}
