//! Console trace log
//!
//! Keeps a ring buffer of recent entries alongside the browser console output
//! so a session can be dumped as JSON from the devtools.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const MAX_LOG_ENTRIES: usize = 500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,    // "info", "warn", "error"
    pub category: String, // "ui-action", "app", etc.
    pub message: String,
    pub data: Option<serde_json::Value>,
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
}

impl LogTrace {
    pub fn new() -> Self {
        LogTrace { logs: VecDeque::with_capacity(MAX_LOG_ENTRIES) }
    }

    pub fn log(&mut self, level: &str, category: &str, message: &str, data: Option<serde_json::Value>) {
        let timestamp = js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default();

        let line = format!("[{}] {}", category, message);
        match level {
            "error" => web_sys::console::error_1(&line.into()),
            "warn" => web_sys::console::warn_1(&line.into()),
            _ => web_sys::console::log_1(&line.into()),
        }

        if self.logs.len() >= MAX_LOG_ENTRIES {
            self.logs.pop_front();
        }
        self.logs.push_back(LogEntry {
            timestamp,
            level: level.to_string(),
            category: category.to_string(),
            message: message.to_string(),
            data,
        });
    }

    pub fn get_logs_json(&self) -> String {
        let logs: Vec<&LogEntry> = self.logs.iter().collect();
        serde_json::to_string_pretty(&logs).unwrap_or_else(|_| "[]".to_string())
    }
}

thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::new());
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log("info", category, message, None);
    });
}

pub fn log_info_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log("info", category, message, Some(data));
    });
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log("warn", category, message, None);
    });
}

pub fn get_logs_json() -> String {
    LOG_TRACE.with(|trace| trace.borrow().get_logs_json())
}
