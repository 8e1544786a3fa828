use crate::{Friend, FriendId, FormRejection, DEFAULT_IMAGE_URL};

/// Local state of the add-friend form
#[derive(Debug, Clone, PartialEq)]
pub struct AddFriendForm {
    pub name: String,
    pub image: String,
    default_image: String,
}

impl Default for AddFriendForm {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_URL)
    }
}

impl AddFriendForm {
    /// Empty name, image field prefilled with `default_image`
    pub fn new(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        Self {
            name: String::new(),
            image: default_image.clone(),
            default_image,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }

    /// Build a friend with a fresh id and reset the fields.
    /// Fields are left untouched when the submission is rejected.
    pub fn submit(&mut self) -> Result<Friend, FormRejection> {
        self.submit_with_id(FriendId::generate)
    }

    /// Same as [`submit`](Self::submit) with a caller-provided id generator.
    /// The generator only runs when the submission is accepted.
    pub fn submit_with_id<F>(&mut self, next_id: F) -> Result<Friend, FormRejection>
    where
        F: FnOnce() -> FriendId,
    {
        if self.name.is_empty() {
            return Err(FormRejection::EmptyName);
        }
        if self.image.is_empty() {
            return Err(FormRejection::EmptyImage);
        }

        let id = next_id();
        let image = format!("{}?u={}", self.image, id);
        let friend = Friend::new(id, self.name.clone(), image);

        self.reset();
        Ok(friend)
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.image = self.default_image.clone();
    }
}
