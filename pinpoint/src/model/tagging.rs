// Code generated from the Amazon Pinpoint service model. DO NOT EDIT.
/// <p>Specifies the tags (keys and values) for an application, campaign, message template, or segment.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug, ::serde::Serialize, ::serde::Deserialize)]
pub struct TagsModel {
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
}
impl TagsModel {
    /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
    pub fn tags(&self) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, ::std::string::String>> {
        self.tags.as_ref()
    }
    /// Creates a new builder-style object to manufacture [`TagsModel`](crate::model::TagsModel).
    pub fn builder() -> crate::model::tags_model::Builder {
        crate::model::tags_model::Builder::default()
    }
    /// Converts this value back into a builder so that individual members can be changed.
    pub fn into_builder(self) -> crate::model::tags_model::Builder {
        crate::model::tags_model::Builder {
            tags: self.tags,
        }
    }
}
impl ::std::hash::Hash for TagsModel {
    fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::smithy_types::shape::ShapeValue::hash_value(&self.tags, state);
    }
}
impl ::std::fmt::Display for TagsModel {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let mut shape = ::smithy_types::shape::DisplayShape::new(f);
        shape.field("tags", &self.tags);
        shape.finish()
    }
}
impl ::smithy_types::shape::ShapeValue for TagsModel {
    fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
        ::std::hash::Hash::hash(self, state)
    }
    fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::fmt::Display::fmt(self, f)
    }
}
/// See [`TagsModel`](crate::model::TagsModel).
pub mod tags_model {

    /// A builder for [`TagsModel`](crate::model::TagsModel).
    #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
    pub struct Builder {
        pub(crate) tags: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>,
    }
    impl Builder {
        /// Adds a key-value pair to `tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        ///
        /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
        pub fn tags(mut self, k: impl ::std::convert::Into<::std::string::String>, v: impl ::std::convert::Into<::std::string::String>) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = ::std::option::Option::Some(hash_map);
            self
        }
        /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
        pub fn set_tags(mut self, input: ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        /// <p>A map of key-value pairs that identifies the tags associated with the resource.</p>
        pub fn get_tags(&self) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>> {
            &self.tags
        }
        /// Inserts a key-value pair into `tags`, failing if `k` is already present.
        ///
        /// The existing entry is left unchanged when the key is a duplicate.
        pub fn add_tags_entry(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: impl ::std::convert::Into<::std::string::String>,
        ) -> ::std::result::Result<&mut Self, ::smithy_types::error::InvalidArgumentError> {
            ::smithy_types::shape::insert_unique(&mut self.tags, "tags", k.into(), v.into())?;
            ::std::result::Result::Ok(self)
        }
        /// Consumes the builder and constructs a [`TagsModel`](crate::model::TagsModel).
        pub fn build(self) -> crate::model::TagsModel {
            crate::model::TagsModel {
                tags: self.tags,
            }
        }
    }
}
