use super::*;

fn job(id: &str, title: &str, company: &str, location: &str, category: &str) -> Job {
    Job {
        id: id.to_owned(),
        title: title.to_owned(),
        company_name: company.to_owned(),
        location: location.to_owned(),
        category: category.to_owned(),
        description: String::new(),
        salary_range: None,
        created_at: None,
    }
}

fn fixture() -> Vec<Job> {
    vec![
        job("j1", "Rust Engineer", "Acme", "Berlin", "engineering"),
        job("j2", "Frontend Developer", "Initech", "Remote", "engineering"),
        job("j3", "Product Designer", "Acme", "Berlin", "design"),
    ]
}

#[test]
fn empty_filters_keep_everything() {
    assert_eq!(filter_jobs(&fixture(), "", "", "").len(), 3);
}

#[test]
fn keyword_matches_title_and_company_case_insensitively() {
    let by_title = filter_jobs(&fixture(), "rust", "", "");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, "j1");

    let by_company = filter_jobs(&fixture(), "ACME", "", "");
    assert_eq!(by_company.len(), 2);
}

#[test]
fn location_filter_is_a_substring_match() {
    let remote = filter_jobs(&fixture(), "", "remo", "");
    assert_eq!(remote.len(), 1);
    assert_eq!(remote[0].id, "j2");
}

#[test]
fn category_filter_is_exact() {
    let design = filter_jobs(&fixture(), "", "", "design");
    assert_eq!(design.len(), 1);
    assert_eq!(design[0].id, "j3");
    assert!(filter_jobs(&fixture(), "", "", "desig").is_empty());
}

#[test]
fn filters_compose() {
    let hits = filter_jobs(&fixture(), "acme", "berlin", "engineering");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "j1");
}

#[test]
fn categories_are_distinct_and_sorted() {
    assert_eq!(categories_of(&fixture()), vec!["design".to_owned(), "engineering".to_owned()]);
    assert!(categories_of(&[]).is_empty());
}
