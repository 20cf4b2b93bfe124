use url::Url;
use crate::config::{CmsConfig, CONFIG};
use crate::models::ImageSource;

const IMAGE_CDN_BASE: &str = "https://cdn.sanity.io/images";
const IMAGE_CDN_HOST: &str = "cdn.sanity.io";

/// Partes de una referencia `image-<id>-<W>x<H>-<ext>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAsset {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

impl ParsedAsset {
    pub fn parse(reference: &str) -> Option<Self> {
        let rest = reference.strip_prefix("image-")?;
        let (rest, format) = rest.rsplit_once('-')?;
        let (id, dimensions) = rest.rsplit_once('-')?;
        let (width, height) = dimensions.split_once('x')?;

        if id.is_empty() || format.is_empty() {
            return None;
        }

        Some(Self {
            id: id.to_string(),
            width: width.parse().ok()?,
            height: height.parse().ok()?,
            format: format.to_string(),
        })
    }

    /// Nombre de fichero del CDN: `<id>-<W>x<H>.<ext>`
    pub fn parse_file_name(file: &str) -> Option<Self> {
        let (rest, format) = file.rsplit_once('.')?;
        Self::parse(&format!("image-{}-{}", rest, format))
    }

    fn file_name(&self) -> String {
        format!("{}-{}x{}.{}", self.id, self.width, self.height, self.format)
    }
}

/// URL completa del CDN: `https://cdn.sanity.io/images/<proyecto>/<dataset>/<fichero>`
/// Conserva su propio proyecto y dataset, sin la query original
fn parse_cdn_url(raw: &str) -> Option<Url> {
    let mut url = Url::parse(raw).ok()?;
    if url.host_str() != Some(IMAGE_CDN_HOST) {
        return None;
    }

    let segments: Vec<&str> = url.path_segments()?.collect();
    match segments.as_slice() {
        ["images", project, dataset, file]
            if !project.is_empty() && !dataset.is_empty() && ParsedAsset::parse_file_name(file).is_some() => {}
        _ => return None,
    }

    url.set_query(None);
    url.set_fragment(None);
    Some(url)
}

/// Construye URLs de imágenes del CDN a partir de referencias de assets
#[derive(Clone, Debug)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
    width: Option<u32>,
    height: Option<u32>,
}

impl ImageUrlBuilder {
    pub fn new() -> Self {
        Self::with_config(&CONFIG.cms)
    }

    pub fn with_config(config: &CmsConfig) -> Self {
        Self {
            project_id: config.project_id.clone(),
            dataset: config.dataset.clone(),
            width: None,
            height: None,
        }
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// URL final, o None si la referencia no es una imagen válida
    pub fn url_for(&self, source: &ImageSource) -> Option<String> {
        let reference = source.asset_ref()?;
        let parsed = if reference.starts_with("https://") || reference.starts_with("http://") {
            parse_cdn_url(reference)
        } else {
            ParsedAsset::parse(reference).and_then(|asset| self.asset_url(&asset))
        };

        let mut url = match parsed {
            Some(url) => url,
            None => {
                log::warn!("⚠️ [IMAGE] Referencia de imagen inválida: {}", reference);
                return None;
            }
        };

        if self.width.is_some() || self.height.is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(w) = self.width {
                pairs.append_pair("w", &w.to_string());
            }
            if let Some(h) = self.height {
                pairs.append_pair("h", &h.to_string());
            }
        }

        Some(url.into())
    }

    fn asset_url(&self, asset: &ParsedAsset) -> Option<Url> {
        let raw = format!(
            "{}/{}/{}/{}",
            IMAGE_CDN_BASE,
            self.project_id,
            self.dataset,
            asset.file_name()
        );
        Url::parse(&raw).ok()
    }
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssetReference, ImageObject};

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::with_config(&CmsConfig {
            project_id: "proj42".to_string(),
            dataset: "production".to_string(),
            ..CmsConfig::default()
        })
    }

    #[test]
    fn parses_asset_reference() {
        let asset = ParsedAsset::parse("image-abc123-640x480-png").unwrap();
        assert_eq!(asset.id, "abc123");
        assert_eq!((asset.width, asset.height), (640, 480));
        assert_eq!(asset.format, "png");
    }

    #[test]
    fn rejects_malformed_references() {
        assert!(ParsedAsset::parse("file-abc-pdf").is_none());
        assert!(ParsedAsset::parse("image-abc-png").is_none());
        assert!(ParsedAsset::parse("image-abc-axb-png").is_none());
        assert!(ParsedAsset::parse("image--10x10-png").is_none());
    }

    #[test]
    fn builds_cdn_url_from_reference() {
        let source = ImageSource::Reference("image-abc123-640x480-png".to_string());
        assert_eq!(
            builder().url_for(&source).as_deref(),
            Some("https://cdn.sanity.io/images/proj42/production/abc123-640x480.png")
        );
    }

    #[test]
    fn appends_size_parameters_for_thumbnails() {
        let source = ImageSource::Object(ImageObject {
            kind: Some("image".to_string()),
            asset: Some(AssetReference { reference: "image-abc-40x40-jpg".to_string() }),
        });
        assert_eq!(
            builder().width(40).height(40).url_for(&source).as_deref(),
            Some("https://cdn.sanity.io/images/proj42/production/abc-40x40.jpg?w=40&h=40")
        );
    }

    #[test]
    fn full_cdn_url_is_resized_in_place() {
        let source = ImageSource::Reference("https://cdn.sanity.io/images/p/d/abc-40x40.png".to_string());
        assert_eq!(
            builder().width(40).height(40).url_for(&source).as_deref(),
            Some("https://cdn.sanity.io/images/p/d/abc-40x40.png?w=40&h=40")
        );
    }

    #[test]
    fn cdn_url_query_is_replaced_by_requested_size() {
        let source = ImageSource::Reference(
            "https://cdn.sanity.io/images/p/d/abc-640x480.jpg?w=1000&fit=max".to_string(),
        );
        assert_eq!(
            builder().width(40).url_for(&source).as_deref(),
            Some("https://cdn.sanity.io/images/p/d/abc-640x480.jpg?w=40")
        );
        assert_eq!(
            builder().url_for(&source).as_deref(),
            Some("https://cdn.sanity.io/images/p/d/abc-640x480.jpg")
        );
    }

    #[test]
    fn foreign_or_malformed_urls_have_no_url() {
        for raw in [
            "https://example.com/images/p/d/abc-40x40.png",
            "https://cdn.sanity.io/files/p/d/abc.pdf",
            "https://cdn.sanity.io/images/p/d/abc.png",
            "https://cdn.sanity.io/images/p/abc-40x40.png",
        ] {
            let source = ImageSource::Reference(raw.to_string());
            assert_eq!(builder().url_for(&source), None, "{}", raw);
        }
    }

    #[test]
    fn parses_cdn_file_name() {
        let asset = ParsedAsset::parse_file_name("abc-640x480.png").unwrap();
        assert_eq!(asset.id, "abc");
        assert_eq!((asset.width, asset.height), (640, 480));
        assert_eq!(asset.format, "png");
    }

    #[test]
    fn invalid_reference_has_no_url() {
        let source = ImageSource::Reference("not-an-image".to_string());
        assert_eq!(builder().url_for(&source), None);
    }
}
