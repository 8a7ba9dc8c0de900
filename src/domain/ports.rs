use crate::domain::model::Person;

/// Sink for confirmed matches. The CLI prints to stdout; tests capture the
/// matches instead of scraping console output.
pub trait Reporter: Send {
    fn report_match(&mut self, person: &Person, raw_body: &str);
}
