use serde::Deserialize;

/// Grid metadata attached to a placement response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Grid {
    pub cell_size_m: f64,
    pub n_rows: u32,
    pub n_cols: u32,
    #[serde(default)]
    pub eligible_cells: Vec<String>,
}

impl Grid {
    /// Label for a zero-based row index: letters for grids of up to 26
    /// rows, numbers beyond that.
    pub fn row_label(&self, row: u32) -> String {
        if self.n_rows <= 26 && row < 26 {
            char::from(b'A' + row as u8).to_string()
        } else {
            (row + 1).to_string()
        }
    }
}

/// Result of `/placement/`: tower count plus an optional rendered layout
/// image and grid summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Placement {
    pub total_towers: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_file: Option<String>,
    #[serde(default)]
    pub grid: Option<Grid>,
}

impl Placement {
    /// Resolves the layout image to an absolute URL.
    ///
    /// `image_url` wins when present: absolute URLs pass through, relative
    /// ones are joined onto `base`. Otherwise the basename of `image_file`
    /// (either path separator) is served from the backend's static mount.
    pub fn image_src(&self, base: &str) -> Option<String> {
        let base = base.trim_end_matches('/');

        if let Some(url) = &self.image_url {
            if url.starts_with("http://") || url.starts_with("https://") {
                return Some(url.clone());
            }
            return Some(format!("{base}/{}", url.trim_start_matches('/')));
        }

        self.image_file.as_ref().map(|file| {
            let name = file.rsplit(['/', '\\']).next().unwrap_or(file);
            format!("{base}/static/{name}")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://127.0.0.1:8000";

    fn placement(image_url: Option<&str>, image_file: Option<&str>) -> Placement {
        Placement {
            total_towers: 12,
            image_url: image_url.map(String::from),
            image_file: image_file.map(String::from),
            grid: None,
        }
    }

    #[test]
    fn test_windows_path_stripped_to_basename() {
        let placement = placement(None, Some("C:\\out\\layout.png"));
        assert_eq!(
            placement.image_src(BASE).unwrap(),
            "http://127.0.0.1:8000/static/layout.png"
        );
    }

    #[test]
    fn test_unix_path_stripped_to_basename() {
        let placement = placement(None, Some("/srv/data/optimized_tower_layout.png"));
        assert_eq!(
            placement.image_src(BASE).unwrap(),
            "http://127.0.0.1:8000/static/optimized_tower_layout.png"
        );
    }

    #[test]
    fn test_absolute_image_url_passes_through() {
        let placement = placement(Some("https://cdn.example.com/layout.png"), None);
        assert_eq!(
            placement.image_src(BASE).unwrap(),
            "https://cdn.example.com/layout.png"
        );
    }

    #[test]
    fn test_relative_image_url_joined_to_base() {
        let placement = placement(Some("/static/layout.png"), Some("ignored.png"));
        assert_eq!(
            placement.image_src(BASE).unwrap(),
            "http://127.0.0.1:8000/static/layout.png"
        );
    }

    #[test]
    fn test_no_image_fields() {
        assert!(placement(None, None).image_src(BASE).is_none());
    }

    #[test]
    fn test_row_labels() {
        let grid = Grid {
            cell_size_m: 2.5,
            n_rows: 8,
            n_cols: 8,
            eligible_cells: Vec::new(),
        };
        assert_eq!(grid.row_label(0), "A");
        assert_eq!(grid.row_label(7), "H");

        let large = Grid {
            cell_size_m: 1.0,
            n_rows: 40,
            n_cols: 40,
            eligible_cells: Vec::new(),
        };
        assert_eq!(large.row_label(0), "1");
        assert_eq!(large.row_label(39), "40");
    }
}
