use crate::domain::model::Person;
use crate::domain::ports::Reporter;

/// Prints matches to stdout in the export tool's original wording.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report_match(&mut self, person: &Person, raw_body: &str) {
        println!(
            "This person:\n {}\nhas their Scopus ID in their ORCID profile.",
            person
        );
        println!("{}", raw_body);
    }
}
