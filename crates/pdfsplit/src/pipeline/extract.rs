//! Turning a page handle into a [`PageResult`].
//!
//! Extraction never fails. A missing handle, an unreadable text layer or a
//! failing image pass each degrade to empty output, so one bad page cannot
//! abort the batch.

use crate::pdf::PageHandle;
use crate::types::{PageImage, PageResult};

/// Builds page results from page handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor<'a> {
    extract_images: bool,
    /// Extension given to images whose backend reported none.
    image_format: &'a str,
}

impl<'a> Extractor<'a> {
    pub fn new(extract_images: bool, image_format: &'a str) -> Self {
        Self {
            extract_images,
            image_format,
        }
    }

    /// Extract the text layer (and images, when enabled) of one page.
    ///
    /// The text is stored verbatim: no trimming, no newline normalization.
    pub fn extract<P: PageHandle>(&self, page: Option<&P>, document_name: &str, page_index: usize) -> PageResult {
        let mut result = PageResult::empty(document_name, page_index);

        let Some(page) = page else {
            return result;
        };

        result.text = extract_text(page, document_name, page_index);
        if self.extract_images {
            result.images = extract_images(page, self.image_format, document_name, page_index);
        }

        result
    }
}

fn extract_text<P: PageHandle>(page: &P, document_name: &str, page_index: usize) -> String {
    match page.extract_text() {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(
                    "Page {} of {} produced invalid UTF-8; replacing bad sequences",
                    page_index,
                    document_name
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        },
        Err(e) => {
            tracing::debug!("Text extraction failed for page {} of {}: {}", page_index, document_name, e);
            String::new()
        }
    }
}

/// Image extension point. Backends currently report no images, so this
/// returns an empty list; indices are reassigned in discovery order.
fn extract_images<P: PageHandle>(
    page: &P,
    default_format: &str,
    document_name: &str,
    page_index: usize,
) -> Vec<PageImage> {
    match page.extract_images() {
        Ok(images) => images
            .into_iter()
            .enumerate()
            .map(|(index, image)| {
                let format = if image.format.is_empty() {
                    default_format.to_string()
                } else {
                    image.format
                };
                PageImage {
                    index,
                    data: image.data,
                    format,
                }
            })
            .collect(),
        Err(e) => {
            tracing::debug!("Image extraction failed for page {} of {}: {}", page_index, document_name, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::PdfError;
    use crate::pdf::error::Result;

    struct StubPage {
        text: Result<Vec<u8>>,
        images: Vec<PageImage>,
    }

    impl PageHandle for StubPage {
        fn extract_text(&self) -> Result<Vec<u8>> {
            self.text.clone()
        }

        fn extract_images(&self) -> Result<Vec<PageImage>> {
            Ok(self.images.clone())
        }
    }

    fn page(text: &str) -> StubPage {
        StubPage {
            text: Ok(text.as_bytes().to_vec()),
            images: Vec::new(),
        }
    }

    #[test]
    fn test_extract_stores_text_verbatim() {
        let stub = page("  Hello\r\nWorld \n\n");
        let result = Extractor::default().extract(Some(&stub), "doc", 2);

        assert_eq!(result.document_name, "doc");
        assert_eq!(result.page_index, 2);
        assert_eq!(result.text, "  Hello\r\nWorld \n\n");
        assert!(result.images.is_empty());
    }

    #[test]
    fn test_missing_handle_yields_empty_result() {
        let result = Extractor::default().extract::<StubPage>(None, "doc", 5);
        assert_eq!(result, PageResult::empty("doc", 5));
    }

    #[test]
    fn test_text_failure_is_absorbed() {
        let stub = StubPage {
            text: Err(PdfError::TextExtraction {
                page_number: 1,
                reason: "broken stream".to_string(),
            }),
            images: Vec::new(),
        };
        let result = Extractor::default().extract(Some(&stub), "doc", 0);
        assert!(result.text.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let stub = StubPage {
            text: Ok(vec![b'o', b'k', 0xFF]),
            images: Vec::new(),
        };
        let result = Extractor::default().extract(Some(&stub), "doc", 0);
        assert_eq!(result.text, "ok\u{FFFD}");
    }

    #[test]
    fn test_images_ignored_unless_enabled() {
        let image = PageImage {
            index: 9,
            data: vec![1, 2, 3],
            format: "png".to_string(),
        };
        let stub = StubPage {
            text: Ok(Vec::new()),
            images: vec![image.clone(), image],
        };

        let disabled = Extractor::new(false, "png").extract(Some(&stub), "doc", 0);
        assert!(disabled.images.is_empty());

        let enabled = Extractor::new(true, "png").extract(Some(&stub), "doc", 0);
        let indices: Vec<usize> = enabled.images.iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_missing_image_format_uses_default() {
        let stub = StubPage {
            text: Ok(Vec::new()),
            images: vec![PageImage {
                index: 0,
                data: vec![7],
                format: String::new(),
            }],
        };

        let result = Extractor::new(true, "jpg").extract(Some(&stub), "doc", 0);
        assert_eq!(result.images[0].format, "jpg");
    }
}
