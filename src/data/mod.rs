mod gallery;
mod prediction;
mod provider;

pub use {
    gallery::{GalleryEntry, ImageGallery},
    prediction::{Forecaster, PredictionStub},
    provider::{DerivedDataProvider, SeededProvider},
};
