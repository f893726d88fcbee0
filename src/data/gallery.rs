use {
    crate::{config::DF, ui::UI_TEXT},
    serde::Serialize,
    std::{fmt, sync::Arc},
};

/// An uploaded image. The bytes are shared, so cloning an entry into a view is cheap.
#[derive(Clone, Serialize)]
pub struct GalleryEntry {
    pub name: String,
    #[serde(skip)]
    pub blob: Arc<[u8]>,
}

impl GalleryEntry {
    pub fn new(name: impl Into<String>, blob: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            blob: blob.into(),
        }
    }

    pub fn caption(&self) -> String {
        format!("{} {}", UI_TEXT.gallery_caption_prefix, self.name)
    }
}

impl fmt::Debug for GalleryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryEntry")
            .field("name", &self.name)
            .field("bytes", &self.blob.len())
            .finish()
    }
}

/// Session-scoped uploads. No format or size checks.
#[derive(Debug, Clone, Default)]
pub struct ImageGallery {
    entries: Vec<GalleryEntry>,
}

impl ImageGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, files: impl IntoIterator<Item = GalleryEntry>) {
        let before = self.entries.len();
        self.entries.extend(files);
        if DF.log_gallery {
            log::info!(
                "Gallery accepted {} file(s), now {}",
                self.entries.len() - before,
                self.entries.len()
            );
        }
    }

    pub fn list(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uploads_are_listed_with_captions_in_order() {
        let mut gallery = ImageGallery::new();
        gallery.accept(vec![
            GalleryEntry::new("cat.png", vec![1u8, 2, 3]),
            GalleryEntry::new("dog.jpg", vec![4u8]),
        ]);
        gallery.accept(std::iter::once(GalleryEntry::new("fox.gif", Vec::<u8>::new())));

        let captions: Vec<_> = gallery.list().iter().map(|e| e.caption()).collect();
        assert_eq!(
            captions,
            [
                "Uploaded Image: cat.png",
                "Uploaded Image: dog.jpg",
                "Uploaded Image: fox.gif"
            ]
        );
        assert_eq!(&*gallery.list()[0].blob, &[1, 2, 3]);
        assert_eq!(gallery.len(), 3);

        gallery.clear();
        assert!(gallery.is_empty());
    }
}
