use askama::Template;

use crate::web::models::Listing;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub app_name: String,
    pub listing: Listing,
}

/// Card grid only; returned to htmx requests.
#[derive(Template)]
#[template(path = "links_list.html")]
pub struct LinksListTemplate {
    pub listing: Listing,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub app_name: String,
}
