use std::{collections::HashSet, sync::Arc};

use tracing::warn;

use crate::{error::Result, record::CourseRecord, source::CatalogSource};

/// Filtered views over a [`CatalogSource`].
///
/// Every call re-fetches the full catalog. The filtered helpers never fail:
/// an unavailable catalog is logged and reported as an empty list.
#[derive(Clone)]
pub struct CatalogClient {
    source: Arc<dyn CatalogSource>,
}

impl CatalogClient {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    pub async fn fetch_all(&self) -> Result<Vec<CourseRecord>> {
        self.source.fetch_all().await
    }

    /// Distinct subjects offered for `filiere`, in first-occurrence order.
    pub async fn distinct_subjects(&self, filiere: &str) -> Vec<String> {
        match self.fetch_all().await {
            Ok(records) => distinct_subjects_in(&records, filiere),
            Err(e) => {
                warn!(filiere, error = %e, "catalog fetch failed while listing subjects");
                Vec::new()
            },
        }
    }

    /// Records matching all three fields exactly, in source order.
    pub async fn matching(&self, filiere: &str, subject: &str, semester: u32) -> Vec<CourseRecord> {
        match self.fetch_all().await {
            Ok(records) => records
                .into_iter()
                .filter(|r| r.matches(filiere, subject, semester))
                .collect(),
            Err(e) => {
                warn!(
                    filiere,
                    subject,
                    semester,
                    error = %e,
                    "catalog fetch failed while listing materials"
                );
                Vec::new()
            },
        }
    }
}

/// Subjects of `filiere` in the order they first appear in `records`.
pub fn distinct_subjects_in(records: &[CourseRecord], filiere: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| r.filiere == filiere)
        .filter(|r| seen.insert(r.subject.as_str()))
        .map(|r| r.subject.clone())
        .collect()
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use {
        super::*,
        crate::{error::Error, source::InMemoryCatalogSource},
    };

    struct UnavailableSource;

    #[async_trait]
    impl CatalogSource for UnavailableSource {
        async fn fetch_all(&self) -> Result<Vec<CourseRecord>> {
            Err(Error::unavailable("connection refused"))
        }
    }

    fn record(filiere: &str, subject: &str, semester: u32, title: &str) -> CourseRecord {
        CourseRecord {
            filiere: filiere.into(),
            subject: subject.into(),
            semester,
            title: title.into(),
            pdf_url: Some(format!("https://cdn.example.com/{title}.pdf")),
            video_url: None,
            exercise_pdf_url: None,
        }
    }

    const SM_A: &str = "Sciences Mathématiques A";
    const PC: &str = "Sciences Physiques";

    fn sample() -> Vec<CourseRecord> {
        vec![
            record(SM_A, "Analyse", 1, "Limites"),
            record(PC, "Chimie", 1, "Acides"),
            record(SM_A, "Algèbre", 1, "Groupes"),
            record(SM_A, "Analyse", 2, "Intégrales"),
            record(SM_A, "Physique", 1, "Ondes"),
            record(SM_A, "Algèbre", 2, "Anneaux"),
            record(SM_A, "Analyse", 1, "Dérivées"),
        ]
    }

    #[test]
    fn distinct_subjects_keep_first_occurrence_order() {
        assert_eq!(distinct_subjects_in(&sample(), SM_A), vec![
            "Analyse", "Algèbre", "Physique"
        ]);
    }

    #[test]
    fn distinct_subjects_never_repeat_for_any_ordering() {
        for shift in 0..sample().len() {
            let mut records = sample();
            records.rotate_left(shift);
            let subjects = distinct_subjects_in(&records, SM_A);
            let unique: HashSet<_> = subjects.iter().collect();
            assert_eq!(unique.len(), subjects.len());

            let first_seen: Vec<&str> = records
                .iter()
                .filter(|r| r.filiere == SM_A)
                .map(|r| r.subject.as_str())
                .fold(Vec::new(), |mut acc, s| {
                    if !acc.contains(&s) {
                        acc.push(s);
                    }
                    acc
                });
            assert_eq!(subjects, first_seen);
        }
    }

    #[tokio::test]
    async fn matching_filters_exactly_in_source_order() {
        let client = CatalogClient::new(Arc::new(InMemoryCatalogSource::new(sample())));
        let titles: Vec<String> = client
            .matching(SM_A, "Analyse", 1)
            .await
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["Limites", "Dérivées"]);
        assert!(client.matching(SM_A, "Analyse", 3).await.is_empty());
    }

    #[tokio::test]
    async fn unavailable_catalog_degrades_to_empty() {
        let client = CatalogClient::new(Arc::new(UnavailableSource));
        assert!(client.distinct_subjects(SM_A).await.is_empty());
        assert!(client.matching(SM_A, "Analyse", 1).await.is_empty());
        assert!(client.fetch_all().await.is_err());
    }
}
