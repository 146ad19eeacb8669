// ABOUTME: Admin listing filter over search text, status and school

use super::status::ApplicationStatus;
use super::Application;

/// `None` on status or school means "all"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    pub search: String,
    pub status: Option<ApplicationStatus>,
    pub school: Option<String>,
}

impl ApplicationFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.status.is_none() && self.school.is_none()
    }

    /// Name and id match case-insensitively; NISN matches as a substring
    pub fn matches(&self, application: &Application) -> bool {
        let search = self.search.trim().to_lowercase();
        let matches_search = search.is_empty()
            || application.student_name.to_lowercase().contains(&search)
            || application.nisn.contains(&search)
            || application.id.to_lowercase().contains(&search);
        let matches_status = self.status.map_or(true, |status| application.status == status);
        let matches_school = self
            .school
            .as_deref()
            .map_or(true, |school| application.school.eq_ignore_ascii_case(school));

        matches_search && matches_status && matches_school
    }

    pub fn apply<'a>(&self, applications: &'a [Application]) -> Vec<&'a Application> {
        applications.iter().filter(|app| self.matches(app)).collect()
    }

    /// Step the status filter: all -> pending -> review -> accepted -> rejected -> all
    pub fn cycle_status(&mut self) {
        let statuses = ApplicationStatus::all();
        self.status = match self.status {
            None => statuses.first().copied(),
            Some(current) => statuses
                .iter()
                .position(|s| *s == current)
                .and_then(|i| statuses.get(i + 1))
                .copied(),
        };
    }

    /// Step the school filter through `schools`, wrapping back to "all"
    pub fn cycle_school(&mut self, schools: &[String]) {
        self.school = match &self.school {
            None => schools.first().cloned(),
            Some(current) => schools
                .iter()
                .position(|s| s == current)
                .and_then(|i| schools.get(i + 1))
                .cloned(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applications::tests::sample_application;

    fn applications() -> Vec<Application> {
        vec![
            sample_application("APP001", "Ahmad Rizki", "1234567890", "SMA Negeri 1 Bandung", ApplicationStatus::Pending),
            sample_application("APP002", "Siti Nurhaliza", "0987654321", "SMA Negeri 3 Bandung", ApplicationStatus::Accepted),
            sample_application("APP003", "Budi Santoso", "1122334455", "SMA Negeri 1 Bandung", ApplicationStatus::Rejected),
        ]
    }

    fn ids(found: Vec<&Application>) -> Vec<&str> {
        found.into_iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let apps = applications();
        assert!(ApplicationFilter::default().is_empty());
        assert_eq!(ApplicationFilter::default().apply(&apps).len(), 3);
    }

    #[test]
    fn test_search_name_nisn_and_id() {
        let apps = applications();
        let by_name = ApplicationFilter { search: "siti".into(), ..Default::default() };
        assert_eq!(ids(by_name.apply(&apps)), vec!["APP002"]);

        let by_nisn = ApplicationFilter { search: "2233".into(), ..Default::default() };
        assert_eq!(ids(by_nisn.apply(&apps)), vec!["APP003"]);

        let by_id = ApplicationFilter { search: "app001".into(), ..Default::default() };
        assert_eq!(ids(by_id.apply(&apps)), vec!["APP001"]);
    }

    #[test]
    fn test_status_and_school_combine() {
        let apps = applications();
        let filter = ApplicationFilter {
            search: String::new(),
            status: Some(ApplicationStatus::Rejected),
            school: Some("SMA Negeri 1 Bandung".into()),
        };
        assert_eq!(ids(filter.apply(&apps)), vec!["APP003"]);
    }

    #[test]
    fn test_cycles_wrap_to_all() {
        let mut filter = ApplicationFilter::default();
        for _ in 0..ApplicationStatus::all().len() {
            filter.cycle_status();
            assert!(filter.status.is_some());
        }
        filter.cycle_status();
        assert_eq!(filter.status, None);

        let schools = vec!["A".to_string(), "B".to_string()];
        filter.cycle_school(&schools);
        filter.cycle_school(&schools);
        assert_eq!(filter.school.as_deref(), Some("B"));
        filter.cycle_school(&schools);
        assert_eq!(filter.school, None);
    }
}
