use crate::core::reader::PersonReader;
use crate::domain::model::AccessToken;
use crate::domain::ports::Reporter;
use crate::orcid::client::OrcidClient;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    pub files: usize,
    pub records: usize,
    pub lookups: usize,
    pub matches: usize,
}

/// Drives the per-file check loop: read records, pick out Scopus IDs, look
/// each one up, hand confirmed matches to the reporter. Strictly sequential;
/// the first error ends the run.
pub struct CheckEngine<R: Reporter> {
    client: OrcidClient,
    token: AccessToken,
    reporter: R,
}

impl<R: Reporter> CheckEngine<R> {
    pub fn new(client: OrcidClient, token: AccessToken, reporter: R) -> Self {
        Self {
            client,
            token,
            reporter,
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub async fn run(&mut self, files: &[PathBuf]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for file in files {
            let file_summary = self.process_file(file).await?;
            summary.files += 1;
            summary.records += file_summary.records;
            summary.lookups += file_summary.lookups;
            summary.matches += file_summary.matches;
        }

        Ok(summary)
    }

    async fn process_file(&mut self, path: &Path) -> Result<RunSummary> {
        tracing::info!("Processing {}", path.display());

        let reader = PersonReader::open(path)?;
        let mut summary = RunSummary::default();

        for person in reader {
            let person = person?;
            summary.records += 1;
            tracing::debug!("Record {}: {}", summary.records, person.id);

            for scopus_id in person.scopus_ids() {
                summary.lookups += 1;
                let lookup = self.client.search_scopus_id(&self.token, scopus_id).await?;

                if lookup.result.num_found > 0 {
                    summary.matches += 1;
                    self.reporter.report_match(&person, &lookup.body);
                }
            }
        }

        tracing::info!(
            "Finished {}: {} record(s), {} lookup(s), {} match(es)",
            path.display(),
            summary.records,
            summary.lookups,
            summary.matches
        );
        Ok(summary)
    }
}
