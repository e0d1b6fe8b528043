#![cfg(feature = "serde")]

use serde::ser::*;

use crate::options::RenderOptions;

impl Serialize for RenderOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("RenderOptions", 4)?;
        state.serialize_field("width", &self.width())?;
        state.serialize_field("height", &self.height())?;
        state.serialize_field("light", &self.light())?;
        state.serialize_field("flip_y", &self.flipped_y())?;
        state.end()
    }
}
