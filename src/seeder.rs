// Seeding driver: logs in as the admin, loads the subject list, then
// issues the configured number of student-creation requests one by one.
// Per-item failures are printed and skipped; only login failure or an
// empty subject list stops the run.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::api::{ApiClient, CreateResult, LoginRequest, StudentPayload, Subject};
use crate::config::SeederConfig;

/// Summary of one seeding run.
#[derive(Debug)]
pub struct SeedReport {
    pub attempted: usize,
    pub created: usize,
}

/// Full seeding flow: authenticate, load reference data, seed. Returns
/// early with an error when the backend rejects the login or when no
/// subject exists to attach students to.
pub fn run(api: &mut ApiClient, config: &SeederConfig) -> Result<SeedReport> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Logging in...");

    let token = api.login(&LoginRequest {
        username: config.username.clone(),
        password: config.password.clone(),
    })?;
    api.set_token(&token);
    spinner.finish_with_message("Logged in, token acquired");

    let subjects = api.fetch_subjects()?;
    if subjects.is_empty() {
        anyhow::bail!(
            "No subjects found; add at least one subject in the system before seeding students"
        );
    }
    println!("Fetched {} subjects", subjects.len());

    seed_students(api, config, &subjects)
}

/// Issue one creation request per student. Each payload is synthesized
/// fresh, so repeated runs pile up distinct records. The loop never
/// aborts: a rejected or failed item is printed and the next one is
/// attempted.
pub fn seed_students(
    api: &ApiClient,
    config: &SeederConfig,
    subjects: &[Subject],
) -> Result<SeedReport> {
    if subjects.is_empty() {
        anyhow::bail!("Refusing to seed students without reference subjects");
    }

    println!("Creating {} students...", config.student_count);
    let bar = ProgressBar::new(config.student_count as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}").unwrap());

    let mut rng = rand::thread_rng();
    let mut created = 0;
    for i in 0..config.student_count {
        let student = generate_student(i, subjects, config, &mut rng)?;
        match api.create_student(&student) {
            Ok(CreateResult::Created) => {
                created += 1;
                bar.println(format!(
                    "  [{}/{}] created {} ({})",
                    i + 1,
                    config.student_count,
                    student.name,
                    student.student_no
                ));
            }
            Ok(CreateResult::Rejected(msg)) => {
                bar.println(format!(
                    "  [{}/{}] rejected: {}",
                    i + 1,
                    config.student_count,
                    msg
                ));
            }
            Err(err) => {
                bar.println(format!(
                    "  [{}/{}] request failed: {}",
                    i + 1,
                    config.student_count,
                    err
                ));
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(SeedReport {
        attempted: config.student_count,
        created,
    })
}

/// Synthesize one student payload: sequential display name, random
/// six-digit student number, random subject and grade, random
/// `138`-prefixed contact number.
pub fn generate_student(
    index: usize,
    subjects: &[Subject],
    config: &SeederConfig,
    rng: &mut impl Rng,
) -> Result<StudentPayload> {
    let subject = subjects
        .choose(rng)
        .context("No subjects to pick from")?;
    let grade = config
        .grades
        .choose(rng)
        .context("No grades configured")?;
    Ok(StudentPayload {
        student_no: format!("STU{}", rng.gen_range(100_000..=999_999)),
        name: format!("测试学生{}", index + 1),
        password: config.student_password.clone(),
        subject_id: subject.id,
        grade: grade.clone(),
        contact: format!("138{}", rng.gen_range(10_000_000..=99_999_999)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects() -> Vec<Subject> {
        vec![
            Subject {
                id: 11,
                name: Some("数学".into()),
            },
            Subject {
                id: 22,
                name: Some("语文".into()),
            },
            Subject { id: 33, name: None },
        ]
    }

    #[test]
    fn payload_links_to_fetched_subjects_and_known_grades() {
        let config = SeederConfig::default();
        let subjects = subjects();
        let ids: Vec<i64> = subjects.iter().map(|s| s.id).collect();
        let mut rng = rand::thread_rng();

        for i in 0..200 {
            let student = generate_student(i, &subjects, &config, &mut rng).unwrap();
            assert!(ids.contains(&student.subject_id));
            assert!(config.grades.contains(&student.grade));
        }
    }

    #[test]
    fn payload_identifiers_follow_fixed_shapes() {
        let config = SeederConfig::default();
        let subjects = subjects();
        let mut rng = rand::thread_rng();

        for i in 0..200 {
            let student = generate_student(i, &subjects, &config, &mut rng).unwrap();

            let no_digits = student.student_no.strip_prefix("STU").unwrap();
            assert_eq!(no_digits.len(), 6);
            assert!(no_digits.chars().all(|c| c.is_ascii_digit()));

            let contact_digits = student.contact.strip_prefix("138").unwrap();
            assert_eq!(contact_digits.len(), 8);
            assert!(contact_digits.chars().all(|c| c.is_ascii_digit()));

            assert_eq!(student.password, config.student_password);
        }
    }

    #[test]
    fn display_name_is_sequential() {
        let config = SeederConfig::default();
        let mut rng = rand::thread_rng();
        let student = generate_student(2, &subjects(), &config, &mut rng).unwrap();
        assert_eq!(student.name, "测试学生3");
    }

    #[test]
    fn empty_subject_list_yields_no_payload() {
        let config = SeederConfig::default();
        let mut rng = rand::thread_rng();
        assert!(generate_student(0, &[], &config, &mut rng).is_err());
    }

    #[test]
    fn seeding_refuses_empty_reference_set() {
        // No request leaves the machine: the guard fires before the loop.
        let api = ApiClient::new("http://localhost:1").unwrap();
        let config = SeederConfig::default();
        let err = seed_students(&api, &config, &[]).unwrap_err();
        assert!(err.to_string().contains("subject"));
    }
}
