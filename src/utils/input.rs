use std::io::{self, BufRead, Write};

use crate::data::input::{InputVector, READING_PRECISION, parse_reading};
use crate::data::pollutant::Pollutant;

/// Asks for one reading until it parses. An empty line keeps the default.
pub fn get_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    pollutant: Pollutant,
) -> io::Result<f64> {
    loop {
        write!(output, "{} [{:.*}]: ", pollutant.label(), READING_PRECISION, 0.0)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input ended before a value for {pollutant} was given"),
            ));
        }

        match parse_reading(pollutant, &line) {
            Ok(value) => return Ok(value),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

/// Prompts for all twelve readings in model order.
pub fn prompt_readings<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<InputVector> {
    let mut readings = InputVector::zeros();
    for pollutant in Pollutant::ALL {
        let value = get_input(input, output, pollutant)?;
        readings
            .set(pollutant, value)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    }
    Ok(readings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reprompts_until_valid() {
        let mut input = Cursor::new("abc\n-3\n12.5\n");
        let mut output = Vec::new();
        let value = get_input(&mut input, &mut output, Pollutant::So2).unwrap();
        assert_eq!(value, 12.5);

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("SO2 (µg/m³) [0.00]: ").count(), 3);
        assert!(transcript.contains("'abc' is not a number"));
        assert!(transcript.contains("must not be negative"));
    }

    #[test]
    fn collects_all_readings_with_defaults() {
        let lines = "60\n100\n5\n20\n15\n10\n5\n1\n30\n\n3\n1\n";
        let mut output = Vec::new();
        let readings = prompt_readings(&mut Cursor::new(lines), &mut output).unwrap();
        assert_eq!(
            readings.as_slice(),
            &[60.0, 100.0, 5.0, 20.0, 15.0, 10.0, 5.0, 1.0, 30.0, 0.0, 3.0, 1.0]
        );
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut output = Vec::new();
        let err = prompt_readings(&mut Cursor::new("1\n2\n"), &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
