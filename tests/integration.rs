use std::{
    str::from_utf8,
    sync::{Arc, Mutex},
};

use transfer_ledger::bin_utils::{RowError, Service};

const TEST_FILE: &str = include_str!("commands.csv");

#[test]
fn process_commands() {
    let mut output = Vec::new();
    let errors = Arc::new(Mutex::new(Vec::new()));
    let collected = errors.clone();
    let service = Service {
        input: TEST_FILE.as_bytes(),
        output: &mut output,
        error_printer: Box::new(move |line, err| {
            let kind = match err {
                RowError::Malformed(_) => "malformed",
                RowError::Rejected(_) => "rejected",
            };
            collected.lock().unwrap().push((line, kind));
        }),
    };
    service.run().unwrap();

    let lines: Vec<&str> = from_utf8(&output).unwrap().lines().collect();
    assert_eq!(
        lines,
        [
            "account,balance",
            "Id-1,800",
            "Id-2,649.75",
            "Id-3,50.25",
        ]
    );

    let errors = errors.lock().unwrap();
    assert_eq!(
        *errors,
        [
            (7, "rejected"),
            (8, "rejected"),
            (9, "rejected"),
            (10, "rejected"),
            (11, "rejected"),
            (12, "rejected"),
            (13, "rejected"),
            (14, "rejected"),
            (15, "rejected"),
            (16, "malformed"),
        ]
    );
}
