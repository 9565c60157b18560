//! Photo reading from the file picker.

use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;

use landmarks::ImageReadError;
use landmarks::photo::{ImageSource, Photo};

/// A file chosen in the form's image input.
#[derive(Clone, Debug)]
pub struct FileImage(pub web_sys::File);

impl FileImage {
    pub fn name(&self) -> String {
        self.0.name()
    }
}

impl ImageSource for FileImage {
    async fn read(&self) -> Result<Photo, ImageReadError> {
        let buffer = JsFuture::from(self.0.array_buffer())
            .await
            .map_err(|e| ImageReadError(e.as_string().unwrap_or_else(|| format!("could not read {}", self.name()))))?;
        let bytes = Uint8Array::new(&buffer).to_vec();
        Ok(Photo::new(self.0.type_(), bytes))
    }
}
