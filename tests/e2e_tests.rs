//! End-to-end integration tests
//!
//! These tests validate the complete review pipeline using predefined test
//! fixtures. Each test:
//! 1. Builds the command line from args.txt plus the fixture files present
//! 2. Runs the review through the runner
//! 3. Writes the report to a temporary file
//! 4. Compares the report with expected.txt, or the error with
//!    expected_error.txt
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Resolved and unknown issuers, transfer fees
//! - Full-balance warnings on native and issued assets
//! - Reserve handling
//! - Non-fungible and malformed trust lines
//! - Every instruction type with a review template
//! - Error conditions (unhandled instruction type, missing fields)

#[cfg(test)]
mod tests {
    use clap::Parser;
    use offer_review_engine::cli::CliArgs;
    use offer_review_engine::runner::run_review;
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Build the CLI arguments of a fixture
    ///
    /// `--lines` and `--directory` are added when the fixture has the
    /// matching file.
    fn fixture_args(fixture_dir: &str) -> CliArgs {
        let args_path = format!("{}/args.txt", fixture_dir);
        let args = fs::read_to_string(&args_path)
            .unwrap_or_else(|e| panic!("Failed to read args file {}: {}", args_path, e));

        let mut argv = vec!["offer-review".to_string()];
        argv.extend(args.split_whitespace().map(str::to_string));

        for (flag, file) in [("--lines", "lines.csv"), ("--directory", "directory.csv")] {
            let path = format!("{}/{}", fixture_dir, file);
            if Path::new(&path).exists() {
                argv.push(flag.to_string());
                argv.push(path);
            }
        }

        argv.push(format!("{}/instruction.json", fixture_dir));

        CliArgs::try_parse_from(&argv)
            .unwrap_or_else(|e| panic!("Invalid arguments for {}: {}", fixture_dir, e))
    }

    /// Run a review fixture and compare the report with expected.txt
    async fn run_report_fixture(fixture_name: &str) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let expected_path = format!("{}/expected.txt", fixture_dir);

        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let args = fixture_args(&fixture_dir);
        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        run_review(&args.to_request(), &args.to_runner_config(), &mut temp_output)
            .await
            .unwrap_or_else(|e| panic!("Failed to review {}: {}", fixture_name, e));

        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    /// Run a failing fixture and compare the error with expected_error.txt
    async fn run_error_fixture(fixture_name: &str) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let expected_path = format!("{}/expected_error.txt", fixture_dir);

        let expected_error = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        let args = fixture_args(&fixture_dir);
        let mut output = Vec::new();

        let error = run_review(&args.to_request(), &args.to_runner_config(), &mut output)
            .await
            .expect_err("Review should have failed");

        assert_eq!(error.to_string(), expected_error.trim_end());
        assert!(output.is_empty(), "No report should be written on error");
    }

    #[rstest]
    #[case("offer_create_resolved_issuer")]
    #[case("offer_create_sell_entire_line")]
    #[case("offer_create_native_above_reserve")]
    #[case("offer_create_custom_reserve")]
    #[case("offer_create_execution_flags")]
    #[case("nft_line_no_warning")]
    #[case("malformed_lines")]
    #[case("payment_send_max")]
    #[case("offer_cancel")]
    #[case("trust_set")]
    #[tokio::test]
    async fn test_report_fixtures(#[case] fixture: &str) {
        run_report_fixture(fixture).await;
    }

    #[rstest]
    #[case("unhandled_account_set")]
    #[case("missing_taker_pays")]
    #[tokio::test]
    async fn test_error_fixtures(#[case] fixture: &str) {
        run_error_fixture(fixture).await;
    }

    #[tokio::test]
    async fn test_missing_instruction_file() {
        let args = CliArgs::try_parse_from([
            "offer-review",
            "--account",
            "rPEPPER7kfTD9w2To4CQk6UCfuHM9c6GDY",
            "tests/fixtures/does_not_exist/instruction.json",
        ])
        .unwrap();

        let error = run_review(&args.to_request(), &args.to_runner_config(), &mut Vec::new())
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "File not found: tests/fixtures/does_not_exist/instruction.json"
        );
    }
}
