//! End-to-end infringement processing: load, geocode, aggregate, emit, and
//! optionally copy into the web client.

use std::path::PathBuf;
use std::time::Instant;

use infringement_map_generate::{EmitError, EmittedFiles};
use infringement_map_geocoder::{GeocodeSummary, GeocodeTable};
use infringement_map_ingest::LoadError;

/// Errors from any pipeline stage.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Where to read from and write to.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Destination for the client copies, or `None` to skip copying.
    pub client_dir: Option<PathBuf>,
}

/// What a pipeline run produced.
#[derive(Debug, Clone)]
pub struct ProcessReport {
    pub records_loaded: usize,
    pub geocode: GeocodeSummary,
    pub locations: usize,
    pub outputs: EmittedFiles,
    pub client_copies: Option<EmittedFiles>,
}

/// Runs every stage against the built-in Queensland geocode table.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or an output cannot be
/// written or copied.
pub fn run(options: &ProcessOptions) -> Result<ProcessReport, PipelineError> {
    let start = Instant::now();

    let records = infringement_map_ingest::load_records(&options.input)?;
    let records_loaded = records.len();

    let (geocoded, geocode) =
        infringement_map_geocoder::geocode_records(&GeocodeTable::queensland(), records);

    let locations = infringement_map_analytics::aggregate(&geocoded);

    let outputs = infringement_map_generate::emit(&options.output_dir, &locations)?;

    let client_copies = options
        .client_dir
        .as_deref()
        .map(|dir| infringement_map_generate::copy_to_client(&outputs, dir))
        .transpose()?;

    log::info!(
        "Processed {records_loaded} records in {:.2}s",
        start.elapsed().as_secs_f64()
    );

    Ok(ProcessReport {
        records_loaded,
        geocode,
        locations: locations.len(),
        outputs,
        client_copies,
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use infringement_map_generate::feature_collection::parse_feature_collection;
    use infringement_map_generate::heatmap_csv::read_points;

    use super::*;

    const SAMPLE: &str = "\
District,Count,Offence Type
BRISBANE,100,Speeding
CAIRNS,10,Seatbelt
BRISBANE,50,Mobile phone
UNKNOWN TOWN,9999,Speeding
Gold Coast,40,Speeding
LOGAN,30,Red light
";

    fn write_input(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("input.csv");
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn options(dir: &Path, client_dir: Option<PathBuf>) -> ProcessOptions {
        ProcessOptions {
            input: write_input(dir, SAMPLE),
            output_dir: dir.join("output"),
            client_dir,
        }
    }

    #[test]
    fn produces_sorted_features_for_known_districts() {
        let tmp = tempfile::tempdir().unwrap();
        let report = run(&options(tmp.path(), None)).unwrap();

        assert_eq!(report.records_loaded, 6);
        assert_eq!(report.geocode, GeocodeSummary { total: 6, geocoded: 4 });
        assert_eq!(report.locations, 3);

        let json = std::fs::read_to_string(&report.outputs.geojson).unwrap();
        let collection = parse_feature_collection(&json).unwrap();

        let summary: Vec<(&str, u64)> = collection
            .features
            .iter()
            .map(|f| (f.properties.location.as_str(), f.properties.count))
            .collect();
        assert_eq!(summary, vec![("BRISBANE", 150), ("LOGAN", 30), ("CAIRNS", 10)]);

        assert_eq!(collection.features[0].geometry.coordinates, [153.0251, -27.4698]);
        assert!((collection.features[0].properties.intensity - 100.0).abs() < f64::EPSILON);
        assert!(collection.features[2].properties.intensity.abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_districts_appear_in_neither_output() {
        let tmp = tempfile::tempdir().unwrap();
        let report = run(&options(tmp.path(), None)).unwrap();

        let json = std::fs::read_to_string(&report.outputs.geojson).unwrap();
        assert!(!json.contains("UNKNOWN TOWN"));
        assert!(!json.contains("Gold Coast"));

        let points = read_points(std::fs::File::open(&report.outputs.csv).unwrap()).unwrap();
        assert_eq!(points.len(), report.locations);
    }

    #[test]
    fn single_district_gets_full_intensity() {
        let tmp = tempfile::tempdir().unwrap();
        let input = write_input(
            tmp.path(),
            "district,count\nBRISBANE,100\nBRISBANE,50\nUNKNOWN TOWN,9999\n",
        );
        let report = run(&ProcessOptions {
            input,
            output_dir: tmp.path().join("out"),
            client_dir: None,
        })
        .unwrap();

        let collection =
            parse_feature_collection(&std::fs::read_to_string(&report.outputs.geojson).unwrap())
                .unwrap();
        assert_eq!(collection.features.len(), 1);
        assert_eq!(collection.features[0].properties.count, 150);
        assert!((collection.features[0].properties.intensity - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_copy_leaves_client_dir_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let report = run(&options(tmp.path(), None)).unwrap();

        assert!(report.client_copies.is_none());
        assert!(report.outputs.geojson.is_file());
        assert!(report.outputs.csv.is_file());
        assert!(!tmp.path().join("client").exists());
    }

    #[test]
    fn copies_outputs_into_client_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let client_dir = tmp.path().join("client/data");
        let report = run(&options(tmp.path(), Some(client_dir.clone()))).unwrap();

        let copies = report.client_copies.unwrap();
        assert_eq!(copies.geojson, client_dir.join("data.json"));
        assert_eq!(copies.csv, client_dir.join("data.csv"));
        assert_eq!(
            std::fs::read(&copies.geojson).unwrap(),
            std::fs::read(&report.outputs.geojson).unwrap()
        );
    }

    #[test]
    fn missing_input_is_a_load_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = run(&ProcessOptions {
            input: tmp.path().join("absent.csv"),
            output_dir: tmp.path().join("output"),
            client_dir: None,
        })
        .unwrap_err();

        assert!(matches!(err, PipelineError::Load(LoadError::Io(_))));
        assert!(!tmp.path().join("output").exists());
    }

    #[test]
    fn missing_column_is_a_load_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = run(&ProcessOptions {
            input: write_input(tmp.path(), "district,total\nBRISBANE,1\n"),
            output_dir: tmp.path().join("output"),
            client_dir: None,
        })
        .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Load(LoadError::MissingColumn { column: "count" })
        ));
    }
}
