use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: String,
    pub title: String,
    #[prop_or_default]
    pub kicker: Option<String>,
    pub children: Children,
}

// Every page block hangs off one of these so the nav anchors always have a
// matching fragment id to land on.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class="page-section">
            <div class="section-inner">
                <div class="section-heading">
                    {
                        if let Some(kicker) = &props.kicker {
                            html! { <p class="section-kicker">{kicker}</p> }
                        } else {
                            html! {}
                        }
                    }
                    <h2 class="section-title">{&props.title}</h2>
                </div>
                { for props.children.iter() }
            </div>
        </section>
    }
}
