use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    tag: &'static str,
}

impl Logger {
    fn new(tag: &'static str) -> Self {
        Self { tag }
    }

    pub fn log(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        println!("[{}][{}] {}", timestamp, self.tag, message);
    }
}

pub fn init_logger(tag: &'static str) {
    LOGGER.get_or_init(|| Logger::new(tag));
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
