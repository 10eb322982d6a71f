//! Entity kinds served by the generic collection container.

use crate::core::entity::{EntityKind, EntityState};
use backoffice_api_models::{
    Advantage, BonusService, Category, Post, Price, QuestionAnswer, ServicePack, SolutionCategory,
};

macro_rules! entity_kind {
    ($(#[$meta:meta])* $kind:ident, $state:ident => $item:ty, $name:literal, $resource:literal, $label:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $kind;

        impl EntityKind for $kind {
            const NAME: &'static str = $name;
            const RESOURCE: &'static str = $resource;
            type Item = $item;

            fn label(item: &Self::Item) -> String {
                item.$label.clone()
            }
        }

        #[doc = concat!("Collection state for `", $name, "`.")]
        pub type $state = EntityState<$kind>;
    };
}

entity_kind!(
    /// Landing-page advantages.
    Advantages, AdvantagesState => Advantage, "advantages", "/advantages", title
);
entity_kind!(
    /// Add-on services.
    BonusServices, BonusServicesState => BonusService, "bonus-services", "/bonus-services", name
);
entity_kind!(
    /// Content categories.
    Categories, CategoriesState => Category, "categories", "/categories", name
);
entity_kind!(
    /// Pricing rows.
    Prices, PricesState => Price, "prices", "/prices", title
);
entity_kind!(
    /// Frequently asked questions.
    QuestionsAnswers, QuestionsAnswersState => QuestionAnswer, "qa", "/qa", question
);
entity_kind!(
    /// Service bundles.
    ServicePacks, ServicePacksState => ServicePack, "service-packs", "/service-packs", name
);
entity_kind!(
    /// Solution page groupings.
    SolutionCategories, SolutionCategoriesState => SolutionCategory, "solution-categories", "/solution-categories", name
);
entity_kind!(
    /// Blog posts and pages.
    Posts, PostsState => Post, "posts", "/posts", title
);

/// Catalog screens reachable from the navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogSection {
    /// [`Advantages`].
    Advantages,
    /// [`BonusServices`].
    BonusServices,
    /// [`Categories`].
    Categories,
    /// [`Prices`].
    Prices,
    /// [`QuestionsAnswers`].
    QuestionsAnswers,
    /// [`ServicePacks`].
    ServicePacks,
    /// [`SolutionCategories`].
    SolutionCategories,
}

impl CatalogSection {
    /// Every section, in navigation order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Advantages,
            Self::BonusServices,
            Self::Categories,
            Self::Prices,
            Self::QuestionsAnswers,
            Self::ServicePacks,
            Self::SolutionCategories,
        ]
    }

    /// Route segment, shared with the kind's name.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Advantages => Advantages::NAME,
            Self::BonusServices => BonusServices::NAME,
            Self::Categories => Categories::NAME,
            Self::Prices => Prices::NAME,
            Self::QuestionsAnswers => QuestionsAnswers::NAME,
            Self::ServicePacks => ServicePacks::NAME,
            Self::SolutionCategories => SolutionCategories::NAME,
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Advantages => "Advantages",
            Self::BonusServices => "Bonus services",
            Self::Categories => "Categories",
            Self::Prices => "Prices",
            Self::QuestionsAnswers => "Q&A",
            Self::ServicePacks => "Service packs",
            Self::SolutionCategories => "Solution categories",
        }
    }

    /// Parse a route segment.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|section| section.slug() == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_round_trip_and_are_unique() {
        let slugs: HashSet<_> = CatalogSection::all().iter().map(|s| s.slug()).collect();
        assert_eq!(slugs.len(), CatalogSection::all().len());
        for section in CatalogSection::all() {
            assert_eq!(CatalogSection::from_slug(section.slug()), Some(section));
        }
        assert_eq!(CatalogSection::from_slug("posts"), None);
    }

    #[test]
    fn labels_come_from_the_configured_field() {
        let qa = QuestionAnswer {
            id: 1,
            question: "How do I pay?".to_string(),
            answer: "By card.".to_string(),
        };
        assert_eq!(QuestionsAnswers::label(&qa), "How do I pay?");
        assert_eq!(Prices::RESOURCE, "/prices");
    }

    #[test]
    fn kinds_get_independent_state_types() {
        let advantages = AdvantagesState::default();
        let packs = ServicePacksState::default();
        assert!(advantages.is_empty());
        assert!(packs.is_empty());
    }
}
