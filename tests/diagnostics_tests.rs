use std::fs;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use clashgen::interfaces::ConvertRequestBuilder;
use clashgen::{convert, Flavor};

/// Keeps every record so the diagnostics of a run can be inspected
struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

#[cfg(test)]
mod diagnostics_tests {
    use super::*;

    // Single test per binary: the logger is process-global
    #[test]
    fn test_skipped_entries_reported_as_warning() {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);

        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("clash.yaml");
        fs::write(
            &source,
            "proxies:\n  - {name: A, type: ss}\n  - bad-entry\n  - {name: B, type: ss}\n",
        )
        .unwrap();
        let out = dir.path().join("SubZ.yml");
        let request = ConvertRequestBuilder::new(&source)
            .output(Flavor::Mobile, &out)
            .build();

        let report = convert(&request).unwrap();
        assert_eq!(report.skipped, 1);

        let records = LOGGER.records.lock().unwrap();
        let warnings: Vec<&String> = records
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, msg)| msg)
            .collect();
        assert_eq!(warnings, vec!["Skipped 1 malformed proxy entries."]);

        // The skip report goes to the log channel only, never into the profile
        let written = fs::read_to_string(&out).unwrap();
        assert!(!written.contains("Skipped"));
    }
}
