//! Logging service and logger backends

use super::config;
use super::events::{LogEvent, LogLevel};
use std::sync::Arc;

/// Simple logger trait
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Main logging service with configuration awareness
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Create service from the installed runtime preferences
    pub fn with_config() -> Self {
        let min_level = config::get_min_log_level();
        let logger: Arc<dyn Logger> = if config::use_structured_logging() {
            Arc::new(StructuredLogger::new(min_level))
        } else {
            Arc::new(ConsoleLogger::new(min_level))
        };

        Self::new(logger, min_level)
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }
}

/// Plain-text console logger; errors go to stderr
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        if event.level <= self.min_level {
            match event.level {
                LogLevel::Error | LogLevel::Warning => eprintln!("{}", event.format()),
                _ => println!("{}", event.format()),
            }
        }
    }
}

/// JSON-lines logger for tooling integration
pub struct StructuredLogger {
    min_level: LogLevel,
}

impl StructuredLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        if event.level <= self.min_level {
            let line = event.format_json().unwrap_or_else(|_| event.format());
            match event.level {
                LogLevel::Error | LogLevel::Warning => eprintln!("{}", line),
                _ => println!("{}", line),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes::{self, Code};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryLogger {
        events: Mutex<Vec<LogEvent>>,
    }

    impl MemoryLogger {
        fn events(&self) -> Vec<LogEvent> {
            self.events.lock().unwrap().clone()
        }

        fn has_event_with_code(&self, code: Code) -> bool {
            self.events().iter().any(|e| e.code == code)
        }
    }

    impl Logger for MemoryLogger {
        fn log(&self, event: &LogEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_service_filters_by_level() {
        let memory = Arc::new(MemoryLogger::default());
        let service = LoggingService::new(memory.clone(), LogLevel::Warning);

        service.log_event(LogEvent::error(codes::export::WRITE_FAILED, "write failed"));
        service.log_event(LogEvent::warning(codes::building::MALFORMED_NUMBER, "bad"));
        service.log_event(LogEvent::info("ignored"));
        service.log_event(LogEvent::debug("ignored"));

        let events = memory.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events.iter().filter(|e| e.is_error()).count(), 1);
        assert_eq!(events.iter().filter(|e| e.is_warning()).count(), 1);
        assert!(memory.has_event_with_code(codes::building::MALFORMED_NUMBER));
    }

    #[test]
    fn test_debug_service_accepts_everything() {
        let memory = Arc::new(MemoryLogger::default());
        let service = LoggingService::new(memory.clone(), LogLevel::Debug);
        assert!(service.should_log(LogLevel::Debug));

        service.log_event(LogEvent::debug("trace"));
        assert_eq!(memory.events().len(), 1);
    }
}
