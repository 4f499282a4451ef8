//! Admin Endpoints
//!
//! CSV export/import and the wipe-everything action. The CSV handling itself
//! happens on the backend.

use super::http::ApiRequest;
use crate::error::ApiError;
use crate::models::{DeleteAllResult, ExportResult, ImportResult};

/// Multipart field the backend reads uploaded files from
const IMPORT_FIELD: &str = "files";

/// Export all tables; returns the generated file names
pub async fn export_data() -> Result<Vec<String>, ApiError> {
    let result: ExportResult = ApiRequest::get("/admin/export/").send().await?;
    Ok(result.exported)
}

/// Upload CSV files; returns the file names the backend accepted
pub async fn import_data(files: &[web_sys::File]) -> Result<Vec<String>, ApiError> {
    let form = web_sys::FormData::new().map_err(ApiError::from_js)?;
    for file in files {
        form.append_with_blob_and_filename(IMPORT_FIELD, file, &file.name())
            .map_err(ApiError::from_js)?;
    }
    let result: ImportResult = ApiRequest::post("/admin/import/").form(form).send().await?;
    Ok(result.imported)
}

pub async fn delete_all() -> Result<String, ApiError> {
    let result: DeleteAllResult = ApiRequest::post("/admin/delete_all/").send().await?;
    Ok(result.message)
}

/// Where an exported file can be downloaded from
pub fn export_url(exports_path: &str, filename: &str) -> String {
    format!(
        "{}/{}",
        exports_path.trim_end_matches('/'),
        super::segment(filename)
    )
}

/// Collect the files picked in an `<input type="file" multiple>`
pub fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_url() {
        assert_eq!(
            export_url("/exports", "projects_20240301_120000.csv"),
            "/exports/projects_20240301_120000.csv"
        );
        assert_eq!(export_url("/exports/", "tasks.csv"), "/exports/tasks.csv");
    }

    #[test]
    fn test_export_result_tolerates_missing_list() {
        let result: ExportResult = serde_json::from_str("{}").unwrap();
        assert!(result.exported.is_empty());
    }
}
