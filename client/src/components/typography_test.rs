use super::*;

#[test]
fn defaults_are_text_base_black_span() {
    assert_eq!(TypographyVariant::default(), TypographyVariant::TextBase);
    assert_eq!(TypographyColor::default(), TypographyColor::Black);
    assert_eq!(TypographyTag::default(), TypographyTag::Span);
}

#[test]
fn class_combines_variant_and_color() {
    assert_eq!(
        typography_class(TypographyVariant::Heading, TypographyColor::Gray, ""),
        "typography typography--heading typography--gray"
    );
}

#[test]
fn class_appends_trimmed_extra() {
    assert_eq!(
        typography_class(TypographyVariant::SubHeadingBold, TypographyColor::White, "  page__title "),
        "typography typography--sub-heading-bold typography--white page__title"
    );
}

#[test]
fn variant_names_are_distinct() {
    let variants = [
        TypographyVariant::Heading,
        TypographyVariant::SubHeading,
        TypographyVariant::SubHeadingBold,
        TypographyVariant::TextBase,
        TypographyVariant::TextBaseBold,
        TypographyVariant::TextSmall,
    ];
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i != j {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
