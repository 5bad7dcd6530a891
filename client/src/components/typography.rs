//! Text primitive with storefront type scale and colors.

#[cfg(test)]
#[path = "typography_test.rs"]
mod typography_test;

use leptos::prelude::*;

/// Type scale step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypographyVariant {
    Heading,
    SubHeading,
    SubHeadingBold,
    #[default]
    TextBase,
    TextBaseBold,
    TextSmall,
}

impl TypographyVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::SubHeading => "sub-heading",
            Self::SubHeadingBold => "sub-heading-bold",
            Self::TextBase => "text-base",
            Self::TextBaseBold => "text-base-bold",
            Self::TextSmall => "text-small",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypographyColor {
    #[default]
    Black,
    White,
    Gray,
}

impl TypographyColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Gray => "gray",
        }
    }
}

/// Element rendered by [`Typography`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypographyTag {
    #[default]
    Span,
    Div,
    P,
    H1,
    H2,
    H3,
}

/// Class list for a typography element.
pub fn typography_class(variant: TypographyVariant, color: TypographyColor, extra: &str) -> String {
    let mut class = format!("typography typography--{} typography--{}", variant.as_str(), color.as_str());
    if !extra.trim().is_empty() {
        class.push(' ');
        class.push_str(extra.trim());
    }
    class
}

/// Styled text block.
#[component]
pub fn Typography(
    #[prop(optional)] tag: TypographyTag,
    #[prop(optional)] variant: TypographyVariant,
    #[prop(optional)] color: TypographyColor,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = typography_class(variant, color, &class);
    match tag {
        TypographyTag::Span => view! { <span class=class>{children()}</span> }.into_any(),
        TypographyTag::Div => view! { <div class=class>{children()}</div> }.into_any(),
        TypographyTag::P => view! { <p class=class>{children()}</p> }.into_any(),
        TypographyTag::H1 => view! { <h1 class=class>{children()}</h1> }.into_any(),
        TypographyTag::H2 => view! { <h2 class=class>{children()}</h2> }.into_any(),
        TypographyTag::H3 => view! { <h3 class=class>{children()}</h3> }.into_any(),
    }
}
