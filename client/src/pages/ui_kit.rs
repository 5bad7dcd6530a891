//! Component showcase for the storefront UI kit.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonColor, ButtonSize};
use crate::components::card::{Card, favourite_label};
use crate::components::icon_button::{IconButton, IconButtonSize, IconButtonVariant};
use crate::components::icons::{BagIcon, HeartIcon, SearchIcon};
use crate::components::input::{Input, InputSize};
use crate::components::page_wrapper::PageWrapper;
use crate::components::typography::{Typography, TypographyColor, TypographyTag, TypographyVariant};
use crate::state::catalog::mock_products;

#[component]
fn Section(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="ui-kit__section">
            <Typography tag=TypographyTag::H2 variant=TypographyVariant::SubHeadingBold>
                {title}
            </Typography>
            <div class="ui-kit__row">{children()}</div>
        </section>
    }
}

#[component]
pub fn UiKitPage() -> impl IntoView {
    let filled = RwSignal::new("Armchair".to_owned());
    let read_only = RwSignal::new("Read-only value".to_owned());
    let icon_active = RwSignal::new(false);
    let card_favourite = RwSignal::new(false);
    let placeholder_favourite = RwSignal::new(true);
    // One card with a photo, one with the placeholder panel.
    let samples: Vec<_> = mock_products().into_iter().take(2).collect();

    let log_click = Callback::new(|_: leptos::ev::MouseEvent| leptos::logging::log!("UI kit button clicked"));
    let toggle_icon = Callback::new(move |_: leptos::ev::MouseEvent| icon_active.update(|v| *v = !*v));

    view! {
        <PageWrapper class="ui-kit">
            <Typography tag=TypographyTag::H1 variant=TypographyVariant::Heading>
                "UI kit"
            </Typography>

            <Section title="Typography">
                <Typography variant=TypographyVariant::Heading>"Heading"</Typography>
                <Typography variant=TypographyVariant::SubHeading>"Sub heading"</Typography>
                <Typography variant=TypographyVariant::SubHeadingBold>"Sub heading bold"</Typography>
                <Typography>"Text base"</Typography>
                <Typography variant=TypographyVariant::TextBaseBold>"Text base bold"</Typography>
                <Typography variant=TypographyVariant::TextSmall color=TypographyColor::Gray>
                    "Text small"
                </Typography>
            </Section>

            <Section title="Buttons">
                <Button size=ButtonSize::S on_click=log_click>"Small"</Button>
                <Button on_click=log_click>"Medium"</Button>
                <Button size=ButtonSize::L on_click=log_click>"Large"</Button>
                <Button size=ButtonSize::Xl on_click=log_click>"Extra large"</Button>
                <Button color=ButtonColor::Transparent on_click=log_click>"Transparent"</Button>
                <Button disabled=true>"Disabled"</Button>
            </Section>

            <Section title="Icon buttons">
                <IconButton active=false alt="Search".to_owned()>
                    <SearchIcon />
                </IconButton>
                <IconButton size=IconButtonSize::L active=false alt="Cart".to_owned()>
                    <BagIcon />
                </IconButton>
                <IconButton
                    variant=IconButtonVariant::Favorite
                    active=icon_active
                    alt=Signal::derive(move || favourite_label(icon_active.get()).to_owned())
                    on_click=toggle_icon
                >
                    <HeartIcon filled=true />
                </IconButton>
            </Section>

            <Section title="Inputs">
                <Input id="ui-kit-empty" label="Name" placeholder="Enter a name" show_clear_button=true />
                <Input id="ui-kit-filled" size=InputSize::L label="Filled" value=filled show_clear_button=true />
                <Input id="ui-kit-readonly" label="Read only" value=read_only readonly=true />
                <Input id="ui-kit-disabled" label="Disabled" placeholder="Unavailable" disabled=true />
            </Section>

            <Section title="Cards">
                {samples
                    .into_iter()
                    .zip([card_favourite, placeholder_favourite])
                    .map(|(product, favourite)| {
                        view! {
                            <Card
                                title=product.title
                                price=product.price.to_string()
                                image_url=product.image_url
                                image_placeholder=product.image_placeholder
                                is_favorite=favourite
                                on_favorite_click=Callback::new(move |()| favourite.update(|v| *v = !*v))
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </Section>
        </PageWrapper>
    }
}
