use super::*;
use crate::extensions::import::JsonProblem;
use std::fs::File;

const FT06_TXT_PATH: &str = "../data/ft06.txt";
const FT06_JSON_PATH: &str = "../data/ft06.json";

#[test]
fn can_read_problem_from_file() {
    let problem = BufReader::new(File::open(FT06_TXT_PATH).unwrap()).read_orlib().unwrap();
    let expected = BufReader::new(File::open(FT06_JSON_PATH).unwrap()).read_json(0).unwrap();

    assert_eq!(problem.nr_jobs(), 6);
    assert_eq!(problem.nr_machines(), 6);
    assert_eq!(problem.lower_bound(), None);
    assert_eq!(problem.processing_time().to_vec(), expected.processing_time().to_vec());
    assert_eq!(problem.machine_sequence().to_vec(), expected.machine_sequence().to_vec());
}

#[test]
fn can_skip_comments_and_empty_lines() {
    let problem = "# a comment\n\n2 2\n# first job\n0 3 1 2\n\n1 2   0 4\n".to_string().read_orlib().unwrap();

    assert_eq!(problem.processing_time().to_vec(), vec![vec![3, 2], vec![2, 4]]);
    assert_eq!(problem.machine_sequence().to_vec(), vec![vec![1, 2], vec![2, 1]]);
}

parameterized_test! {can_reject_invalid_text, (text, expected), {
    can_reject_invalid_text_impl(text, expected);
}}

can_reject_invalid_text! {
    case01_empty: ("", "unexpected end of file"),
    case02_only_comments: ("# nothing\n", "unexpected end of file"),
    case03_bad_header: ("2\n0 3 1 2\n", "cannot parse amount of jobs and machines"),
    case04_not_number: ("2 two\n", "cannot parse 'two'"),
    case05_short_job: ("2 2\n0 3 1\n1 2 0 4\n", "job 0 should have 4 values, got 3"),
    case06_missing_job: ("2 2\n0 3 1 2\n", "cannot read job 1"),
    case07_no_jobs: ("0 2\n", "no jobs"),
    case08_machine_range: ("1 2\n0 3 2 2\n", "machine"),
    case09_huge_header: ("99999999999 2\n", "cannot read job 0"),
}

fn can_reject_invalid_text_impl(text: &str, expected: &str) {
    match text.to_string().read_orlib() {
        Err(err) => assert!(err.to_string().contains(expected), "unexpected error: {err}"),
        Ok(_) => unreachable!("invalid text is accepted"),
    }
}

#[test]
fn can_write_problem_in_text_format() {
    let problem = BufReader::new(File::open(FT06_JSON_PATH).unwrap()).read_json(0).unwrap();
    let mut buffer = Vec::new();

    serialize_orlib_problem(BufWriter::new(&mut buffer), &problem).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines = text.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "# lower bound 55");
    assert_eq!(lines[1], "6 6");
    assert_eq!(lines[2], "2 1 0 3 1 6 3 7 5 3 4 6");
    assert_eq!(lines[7], "1 3 3 3 5 9 0 10 4 4 2 1");

    let restored = text.read_orlib().unwrap();
    assert_eq!(restored.machine_sequence().to_vec(), problem.machine_sequence().to_vec());
}
