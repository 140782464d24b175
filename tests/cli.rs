// End-to-end runs of the compiled binary. Every test points the cache at a
// temp directory and clears the API credential, so nothing here touches the
// network: fetch paths fail fast on the missing key and local paths read the
// seeded files.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn moviedb(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("moviedb-cli").unwrap();
    cmd.env("MOVIEDB_DATA_DIR", data_dir)
        .env_remove("TMDB_API_KEY")
        .env_remove("TMDB_BASE_URL");
    cmd
}

fn seed(dir: &Path, file: &str, payload: serde_json::Value) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(file), payload.to_string()).unwrap();
}

#[test]
fn help_lists_every_command() {
    let temp = TempDir::new().unwrap();

    moviedb(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("get-persons")
                .and(predicate::str::contains("get-person"))
                .and(predicate::str::contains("get-movies"))
                .and(predicate::str::contains("get-movie"))
                .and(predicate::str::contains("interactive")),
        );

    // No arguments is a usage error, not a silent exit.
    moviedb(temp.path()).assert().failure();
}

#[test]
fn invalid_page_reports_through_the_spinner_and_exits_zero() {
    let temp = TempDir::new().unwrap();

    moviedb(temp.path())
        .args(["get-movies", "--page", "abc"])
        .assert()
        .success()
        .stderr(predicate::str::contains("the page must be a number"));

    moviedb(temp.path())
        .args(["get-persons", "--page", "0"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "the page must be a positive number",
        ));
}

#[test]
fn local_movies_render_from_the_cache_file() {
    let temp = TempDir::new().unwrap();
    seed(
        temp.path(),
        "popular-movies.json",
        json!({
            "page": 1,
            "total_pages": 5,
            "results": [
                {"id": 11, "title": "Seeded Movie", "release_date": "2020-01-01", "vote_average": 8.25}
            ]
        }),
    );

    moviedb(temp.path())
        .args(["get-movies", "--page", "1", "--local"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Page 1 of 5").and(predicate::str::contains("Seeded Movie")),
        )
        .stderr(predicate::str::contains("Popular movies data loaded"));
}

#[test]
fn now_playing_local_reads_its_own_file() {
    let temp = TempDir::new().unwrap();
    // Only the now-playing file exists; reading the popular one would fail.
    seed(
        temp.path(),
        "now-playing-movies.json",
        json!({
            "page": 1,
            "total_pages": 2,
            "results": [
                {"id": 21, "title": "Midnight Screening", "release_date": "2024-06-01", "vote_average": 7.0}
            ]
        }),
    );

    moviedb(temp.path())
        .args(["get-movies", "--page", "1", "--local", "--now-playing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Midnight Screening"))
        .stderr(predicate::str::contains("Movies playing now data loaded"));
}

#[test]
fn persons_local_with_save_renders_and_leaves_the_file_alone() {
    let temp = TempDir::new().unwrap();
    seed(
        temp.path(),
        "popular-persons.json",
        json!({
            "page": 1,
            "total_pages": 3,
            "results": [
                {"id": 31, "name": "Seeded Person", "known_for_department": "Acting", "popularity": 9.875}
            ]
        }),
    );
    let before = fs::read_to_string(temp.path().join("popular-persons.json")).unwrap();

    moviedb(temp.path())
        .args(["get-persons", "--page", "1", "--popular", "--local", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded Person"))
        .stderr(
            predicate::str::contains("Popular persons data loaded")
                .and(predicate::str::contains("Persons saved to file!").not()),
        );

    let after = fs::read_to_string(temp.path().join("popular-persons.json")).unwrap();
    assert_eq!(before, after, "a local load must not rewrite the file");
}

#[test]
fn missing_cache_file_reports_a_read_failure() {
    let temp = TempDir::new().unwrap();

    moviedb(temp.path())
        .args(["get-persons", "--page", "1", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("cannot read")
                .and(predicate::str::contains("popular-persons.json")),
        );
}

#[test]
fn person_local_with_save_rewrites_the_loaded_payload() {
    let temp = TempDir::new().unwrap();
    seed(
        temp.path(),
        "person.json",
        json!({"id": 287, "name": "Cached Person", "known_for_department": "Acting"}),
    );

    moviedb(temp.path())
        .args(["get-person", "-i", "287", "--local", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Person data saved to person.json"));

    let stored = fs::read_to_string(temp.path().join("person.json")).unwrap();
    assert!(stored.contains("Cached Person"));
}

#[test]
fn network_commands_without_a_key_report_the_missing_credential() {
    let temp = TempDir::new().unwrap();

    moviedb(temp.path())
        .args(["get-movies", "--page", "1", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("TMDB_API_KEY is not set"));
}

#[test]
fn single_movie_ignores_save_and_local_flags() {
    let temp = TempDir::new().unwrap();
    // `--local` does not rescue the fetch and `--save` writes nothing; the
    // command still goes to the network and fails on the missing key.
    moviedb(temp.path())
        .args(["get-movie", "-i", "550", "--save", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("TMDB_API_KEY is not set"));

    assert!(!temp.path().join("movie.json").exists());
}
