use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub title: String,
    pub bullets: Vec<String>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class="service-card">
            <h3 class="card-title">{&props.title}</h3>
            <ul class="check-list">
                { for props.bullets.iter().map(|bullet| html! { <li>{bullet}</li> }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatProps {
    pub value: String,
    pub label: String,
}

#[function_component(Stat)]
pub fn stat(props: &StatProps) -> Html {
    html! {
        <div class="stat-tile">
            <div class="stat-value">{&props.value}</div>
            <div class="stat-label">{&props.label}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InfoCardProps {
    pub title: String,
    pub children: Children,
}

#[function_component(InfoCard)]
pub fn info_card(props: &InfoCardProps) -> Html {
    html! {
        <div class="info-card">
            <h3 class="card-title">{&props.title}</h3>
            <div class="card-body">
                { for props.children.iter() }
            </div>
        </div>
    }
}
