#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::input::{parse_number, read_quantity, read_validated};
    use crate::models::{Quantity, INVALID_NUMBER_MESSAGE};
    use rstest::rstest;
    use std::io::Cursor;

    // Helper to run the reader against scripted lines and capture everything written
    fn run_reader(lines: &str, quantity: Quantity) -> (Result<f64, AppError>, String) {
        let mut input = Cursor::new(lines.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = read_quantity(&mut input, &mut output, quantity);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_weight_reader_recovers_from_bad_input() {
        let (result, output) = run_reader("abc\n-5\n70\n", Quantity::Weight);

        assert_eq!(result.unwrap(), 70.0);
        assert_eq!(output.matches(INVALID_NUMBER_MESSAGE).count(), 1);
        assert_eq!(output.matches("Please enter a valid weight.").count(), 1);
        assert_eq!(output.matches("Enter weight in kg: ").count(), 3);
        assert_eq!(
            output,
            "Enter weight in kg: Invalid input. Please enter a number.\n\
             Enter weight in kg: Please enter a valid weight.\n\
             Enter weight in kg: "
        );
    }

    #[test]
    fn test_height_reader_uses_height_messages() {
        let (result, output) = run_reader("0\n1.75\n", Quantity::Height);

        assert_eq!(result.unwrap(), 1.75);
        assert_eq!(
            output,
            "Enter height in meters: Please enter a valid height.\nEnter height in meters: "
        );
    }

    #[test]
    fn test_reader_accepts_first_valid_line_and_leaves_rest() {
        let mut input = Cursor::new(b"82.5\n1.9\n".to_vec());
        let mut output = Vec::new();

        let weight = read_quantity(&mut input, &mut output, Quantity::Weight).unwrap();
        let height = read_quantity(&mut input, &mut output, Quantity::Height).unwrap();

        assert_eq!(weight, 82.5);
        assert_eq!(height, 1.9);
    }

    #[test]
    fn test_reader_trims_whitespace_and_handles_missing_newline() {
        let (result, _) = run_reader("   64.2  \r\n", Quantity::Weight);
        assert_eq!(result.unwrap(), 64.2);

        let (result, _) = run_reader("1.6", Quantity::Height);
        assert_eq!(result.unwrap(), 1.6);
    }

    #[test]
    fn test_reader_rejects_nan_but_accepts_infinity() {
        let (result, output) = run_reader("NaN\n-inf\ninf\n", Quantity::Weight);

        assert_eq!(result.unwrap(), f64::INFINITY);
        assert_eq!(output.matches("Please enter a valid weight.").count(), 2);
        assert_eq!(output.matches(INVALID_NUMBER_MESSAGE).count(), 0);
    }

    #[test]
    fn test_reader_accepts_digit_group_underscores() {
        let (result, output) = run_reader("1__000\n1_000.5\n", Quantity::Weight);

        assert_eq!(result.unwrap(), 1000.5);
        assert_eq!(output.matches(INVALID_NUMBER_MESSAGE).count(), 1);
    }

    #[test]
    fn test_reader_reports_closed_input() {
        let (result, output) = run_reader("abc\n", Quantity::Height);

        match result {
            Err(AppError::InputClosed(field)) => assert_eq!(field, "height"),
            other => panic!("Expected InputClosed, got {:?}", other),
        }
        assert_eq!(output.matches(INVALID_NUMBER_MESSAGE).count(), 1);
    }

    #[test]
    fn test_reader_reports_closed_input_on_empty_stream() {
        let (result, output) = run_reader("", Quantity::Weight);

        assert!(matches!(result, Err(AppError::InputClosed("weight"))));
        assert_eq!(output, "Enter weight in kg: ");
    }

    #[test]
    fn test_read_validated_with_custom_parser_and_predicate() {
        let mut input = Cursor::new(b"seven\n3\n12\n".to_vec());
        let mut output = Vec::new();

        let value = read_validated(
            &mut input,
            &mut output,
            "count",
            "> ",
            |text| text.parse::<u32>().ok(),
            |n| *n >= 10,
            "Too small.",
        )
        .unwrap();

        assert_eq!(value, 12);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "> Invalid input. Please enter a number.\n> Too small.\n> "
        );
    }

    #[rstest]
    #[case("70", Some(70.0))]
    #[case("1.75", Some(1.75))]
    #[case("-5", Some(-5.0))]
    #[case("1e2", Some(100.0))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("70kg", None)]
    #[case("1_000", Some(1000.0))]
    #[case("1_000.2_5", Some(1000.25))]
    #[case("1e1_0", Some(1e10))]
    #[case("_1", None)]
    #[case("1_", None)]
    #[case("1__0", None)]
    #[case("1_.5", None)]
    fn test_parse_number(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_number(text), expected);
    }
}
