use std::io::{self, Write};

use weather_core::{FetchError, WeatherReport};

const MISSING: &str = "N/A";

pub const FAREWELL: &str = "Thanks for using Surya's Weather App!";

fn or_missing<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

/// Print the report block, including the blank lines around it.
pub fn write_report<W: Write>(out: &mut W, report: &WeatherReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Weather report for: {}", report.location_name().unwrap_or("Unknown"))?;
    writeln!(out, "Temperature: {} °C", or_missing(report.temperature_c()))?;
    writeln!(out, "Feels like: {} °C", or_missing(report.feels_like_c()))?;
    writeln!(out, "Condition: {}", or_missing(report.condition()))?;
    writeln!(out, "Humidity: {} %", or_missing(report.humidity_pct()))?;
    writeln!(out, "Wind speed: {} m/s", or_missing(report.wind_speed_mps()))?;
    writeln!(out)
}

/// Print the failure branch for `err`: HTTP status, or network error.
///
/// An unreadable 2xx body is reported on the network-error line.
pub fn write_fetch_error<W: Write>(out: &mut W, err: &FetchError) -> io::Result<()> {
    match err {
        FetchError::Status { api_message, .. } => {
            writeln!(out, "Failed to fetch weather: {err}")?;
            if let Some(message) = api_message {
                writeln!(out, "API says: {message}")?;
            }
            Ok(())
        }
        FetchError::Network(_) => writeln!(out, "Network error: {err}"),
        FetchError::Decode(_) => writeln!(out, "Network error: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::error::StatusCode;

    fn render(report: &WeatherReport) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn report_renders_all_fields() {
        let report: WeatherReport = serde_json::from_str(
            r#"{"name":"Chennai","main":{"temp":30,"feels_like":33,"humidity":70},"weather":[{"description":"haze"}],"wind":{"speed":3.1}}"#,
        )
        .unwrap();

        assert_eq!(
            render(&report),
            "\nWeather report for: Chennai\n\
             Temperature: 30 °C\n\
             Feels like: 33 °C\n\
             Condition: haze\n\
             Humidity: 70 %\n\
             Wind speed: 3.1 m/s\n\n"
        );
    }

    #[test]
    fn empty_report_renders_placeholders() {
        assert_eq!(
            render(&WeatherReport::default()),
            "\nWeather report for: Unknown\n\
             Temperature: N/A °C\n\
             Feels like: N/A °C\n\
             Condition: N/A\n\
             Humidity: N/A %\n\
             Wind speed: N/A m/s\n\n"
        );
    }

    #[test]
    fn status_error_prints_api_message_when_present() {
        let err = FetchError::Status {
            status: StatusCode::NOT_FOUND,
            api_message: Some("city not found".into()),
        };
        let mut buf = Vec::new();
        write_fetch_error(&mut buf, &err).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Failed to fetch weather: HTTP status 404 Not Found\nAPI says: city not found\n"
        );
    }

    #[test]
    fn status_error_without_message_is_one_line() {
        let err = FetchError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            api_message: None,
        };
        let mut buf = Vec::new();
        write_fetch_error(&mut buf, &err).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "Failed to fetch weather: HTTP status 500 Internal Server Error\n");
    }

    #[test]
    fn decode_error_uses_network_line() {
        let err = FetchError::from(serde_json::from_str::<WeatherReport>("<html>").unwrap_err());
        let mut buf = Vec::new();
        write_fetch_error(&mut buf, &err).unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("Network error: Failed to parse weather JSON: "), "output: {out:?}");
        assert!(!out.contains("API says"));
    }
}
