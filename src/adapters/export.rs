use crate::domain::model::RankedPlanet;
use crate::utils::error::{HabitabilityError, Result};
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const ZIP_ENTRY_NAME: &str = "ranked.csv";

pub fn ranking_csv(ranked: &[RankedPlanet]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["rank", "planet_name", "habitability_probability"])?;

    for (index, planet) in ranked.iter().enumerate() {
        writer.write_record([
            (index + 1).to_string(),
            planet.name.clone(),
            format!("{:.4}", planet.probability),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| HabitabilityError::IoError(e.into_error()))
}

/// 依副檔名決定輸出格式：.zip 會包成壓縮檔
pub fn encode_ranking(ranked: &[RankedPlanet], path: &str) -> Result<Vec<u8>> {
    let csv_data = ranking_csv(ranked)?;
    if !path.to_ascii_lowercase().ends_with(".zip") {
        return Ok(csv_data);
    }

    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    zip.start_file(ZIP_ENTRY_NAME, SimpleFileOptions::default())?;
    zip.write_all(&csv_data)?;
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FeatureVector;
    use std::io::Read;

    fn ranked() -> Vec<RankedPlanet> {
        vec![
            RankedPlanet {
                name: "Teegarden's Star b".to_string(),
                features: FeatureVector::new(1.02, 4.9, 2637.0, 0.025),
                probability: 0.91234,
            },
            RankedPlanet {
                name: "K2-72, e".to_string(),
                features: FeatureVector::new(1.29, 24.2, 3360.0, 0.106),
                probability: 0.5,
            },
        ]
    }

    #[test]
    fn test_csv_quotes_names_with_commas() {
        let csv = String::from_utf8(ranking_csv(&ranked()).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[1], "1,Teegarden's Star b,0.9123");
        assert_eq!(lines[2], "2,\"K2-72, e\",0.5000");
    }

    #[test]
    fn test_zip_target_wraps_csv() {
        let bytes = encode_ranking(&ranked(), "out/top10.ZIP").unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 1);

        let mut content = String::new();
        archive
            .by_name(ZIP_ENTRY_NAME)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content.as_bytes(), ranking_csv(&ranked()).unwrap().as_slice());
    }

    #[test]
    fn test_empty_ranking_has_header_only() {
        let csv = encode_ranking(&[], "top.csv").unwrap();
        assert_eq!(
            String::from_utf8(csv).unwrap(),
            "rank,planet_name,habitability_probability\n"
        );
    }
}
