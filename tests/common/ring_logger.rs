use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::Mutex;

// Keeps the most recent lines only; tests look for lines they just caused.
const RING_BUFFER_SIZE: usize = 256;

lazy_static::lazy_static! {
    static ref LOG_BUFFER: Mutex<VecDeque<String>> = Mutex::new(VecDeque::with_capacity(RING_BUFFER_SIZE));
}

struct RingLogger;

impl log::Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut buffer = LOG_BUFFER.lock().unwrap();
            if buffer.len() >= RING_BUFFER_SIZE {
                buffer.pop_front();
            }
            buffer.push_back(format!("{}", record.args()));
        }
    }

    fn flush(&self) {}
}

#[allow(dead_code)]
pub fn init_logger() -> Result<(), SetLoggerError> {
    log::set_logger(&RingLogger).map(|()| log::set_max_level(LevelFilter::Trace))
}

#[allow(dead_code)]
pub fn logged_lines() -> Vec<String> {
    LOG_BUFFER.lock().unwrap().iter().cloned().collect()
}

#[allow(dead_code)]
pub fn dump_log() {
    let buffer = LOG_BUFFER.lock().unwrap();
    if buffer.is_empty() {
        println!("Log buffer is empty.");
        return;
    }

    println!("--- LAST {} LOG LINES ---", buffer.len());
    for (i, line) in buffer.iter().enumerate() {
        let relative = (i as i32) - (buffer.len() as i32) + 1;
        println!("{:>4}. {}", relative, line);
    }
}
