use mlib_log::{Config, Journal, Kind, ALL};
use std::{fmt::Write, sync::Arc, thread};

#[test]
fn test_concurrent_entries() {
    let path = std::env::temp_dir().join(format!("mlib-log-concurrent-{}.log", std::process::id()));
    let journal = Arc::new(Journal::new(Config::default()));
    journal.open_file(&path).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let journal = journal.clone();
            thread::spawn(move || {
                for i in 0..100 {
                    let mut entry = journal.entry().kind(Kind::Info);
                    write!(entry, "worker={worker} i={i}").unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    journal.close_file();

    // Every entry is written as one whole line
    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 400);
    for line in lines {
        let text = &line[24..];
        assert!(text.starts_with("[Info] worker="), "{line}");
    }
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_reconfigure_while_writing() {
    let path = std::env::temp_dir().join(format!("mlib-log-levels-{}.log", std::process::id()));
    let journal = Journal::new(Config {
        level: 0,
        categories: 0b01,
    });
    journal.open_file(&path).unwrap();

    for level in 0..4 {
        write!(journal.entry().level(level), "level {level}").unwrap();
    }
    journal.set_level(3);
    journal.set_categories(ALL);
    for level in 0..4 {
        write!(journal.entry_in(0b10).level(level), "level {level}").unwrap();
    }
    journal.close_file();

    let contents = std::fs::read_to_string(&path).unwrap();
    let texts: Vec<&str> = contents.lines().map(|line| &line[24..]).collect();
    assert_eq!(
        texts,
        vec!["level 0", "level 0", "level 1", "level 2", "level 3"]
    );
    std::fs::remove_file(&path).unwrap();
}
