//! Story catalog.
//!
//! Every story shows one widget in one state, the way a component gallery
//! would. Stories are addressed by slugs such as `data-table/selectable`.

pub mod people;
mod story;

pub use story::Story;

/// The component a story belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// The data table.
    DataTable,
    /// The text input field.
    InputField,
}

impl Component {
    /// Catalog section title.
    pub fn title(&self) -> &'static str {
        match self {
            Component::DataTable => "Components/DataTable",
            Component::InputField => "Components/InputField",
        }
    }

    /// Short description of the component.
    pub fn description(&self) -> &'static str {
        match self {
            Component::DataTable => {
                "A generic, typed data table with sorting, selection, loading and empty states."
            }
            Component::InputField => {
                "A text input with label, helper/error text, variants, sizes, loading, disabled, clear button and password toggle."
            }
        }
    }
}

/// Identifies a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryId {
    TableBasic,
    TableSortable,
    TableLoading,
    TableEmpty,
    TableSelectable,
    InputPlayground,
    InputInvalid,
    InputLoading,
    InputDisabled,
    InputWithClear,
    InputPassword,
    InputVariantsAndSizes,
}

impl StoryId {
    /// All stories in catalog order.
    pub const ALL: [StoryId; 12] = [
        StoryId::TableBasic,
        StoryId::TableSortable,
        StoryId::TableLoading,
        StoryId::TableEmpty,
        StoryId::TableSelectable,
        StoryId::InputPlayground,
        StoryId::InputInvalid,
        StoryId::InputLoading,
        StoryId::InputDisabled,
        StoryId::InputWithClear,
        StoryId::InputPassword,
        StoryId::InputVariantsAndSizes,
    ];

    /// The component this story shows.
    pub fn component(&self) -> Component {
        match self {
            StoryId::TableBasic
            | StoryId::TableSortable
            | StoryId::TableLoading
            | StoryId::TableEmpty
            | StoryId::TableSelectable => Component::DataTable,
            _ => Component::InputField,
        }
    }

    /// Display name of the story.
    pub fn name(&self) -> &'static str {
        match self {
            StoryId::TableBasic => "Basic",
            StoryId::TableSortable => "Sortable",
            StoryId::TableLoading | StoryId::InputLoading => "Loading",
            StoryId::TableEmpty => "Empty",
            StoryId::TableSelectable => "Selectable",
            StoryId::InputPlayground => "Playground",
            StoryId::InputInvalid => "Invalid",
            StoryId::InputDisabled => "Disabled",
            StoryId::InputWithClear => "With Clear",
            StoryId::InputPassword => "Password",
            StoryId::InputVariantsAndSizes => "Variants And Sizes",
        }
    }

    /// The story slug, e.g. `input-field/with-clear`.
    pub fn slug(&self) -> &'static str {
        match self {
            StoryId::TableBasic => "data-table/basic",
            StoryId::TableSortable => "data-table/sortable",
            StoryId::TableLoading => "data-table/loading",
            StoryId::TableEmpty => "data-table/empty",
            StoryId::TableSelectable => "data-table/selectable",
            StoryId::InputPlayground => "input-field/playground",
            StoryId::InputInvalid => "input-field/invalid",
            StoryId::InputLoading => "input-field/loading",
            StoryId::InputDisabled => "input-field/disabled",
            StoryId::InputWithClear => "input-field/with-clear",
            StoryId::InputPassword => "input-field/password",
            StoryId::InputVariantsAndSizes => "input-field/variants-and-sizes",
        }
    }

    /// Find a story by slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.slug() == slug)
    }

    /// Position of this story in [`StoryId::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|id| id == self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_slugs_round_trip() {
        for id in StoryId::ALL {
            assert_eq!(StoryId::from_slug(id.slug()), Some(id));
        }
        assert_eq!(StoryId::from_slug("data-table/unknown"), None);
    }

    #[test]
    fn test_slugs_unique() {
        let slugs: HashSet<_> = StoryId::ALL.iter().map(|id| id.slug()).collect();
        assert_eq!(slugs.len(), StoryId::ALL.len());
    }

    #[test]
    fn test_components() {
        assert_eq!(StoryId::TableEmpty.component(), Component::DataTable);
        assert_eq!(StoryId::InputPassword.component(), Component::InputField);
        assert_eq!(Component::DataTable.title(), "Components/DataTable");
    }

    #[test]
    fn test_index() {
        assert_eq!(StoryId::TableBasic.index(), 0);
        assert_eq!(StoryId::InputVariantsAndSizes.index(), 11);
    }
}
