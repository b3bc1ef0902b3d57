//! The six lists the two pages show, and how each item is drawn.

use crate::list_renderer::ListSpec;
use crate::page::{Card, CardImage, CardKind, Container};

use sc_core::{Client, Contact, NewsletterSubscription, Project};

const PROJECT_CARD_FALLBACK: &str = "https://via.placeholder.com/400x250?text=Project+Image";
const CLIENT_CARD_FALLBACK: &str = "https://via.placeholder.com/120?text=Client";
const LIST_ITEM_FALLBACK: &str = "https://via.placeholder.com/100?text=Image";
const READ_MORE: &str = "READ MORE";

// =========================================================================
// Landing page
// =========================================================================

pub const PUBLIC_PROJECTS: ListSpec<Project> = ListSpec {
    container: Container::ProjectsGrid,
    label: "projects",
    empty: "No projects available yet.",
    error: "Error loading projects. Please try again later.",
    render: project_card,
};

pub const PUBLIC_CLIENTS: ListSpec<Client> = ListSpec {
    container: Container::ClientsGrid,
    label: "clients",
    empty: "No clients available yet.",
    error: "Error loading clients. Please try again later.",
    render: client_card,
};

pub fn project_card(project: &Project) -> Card {
    Card {
        kind: CardKind::Project,
        title: project.name.clone(),
        lines: vec![project.description.clone()],
        image: Some(image(&project.image_url, &project.name, PROJECT_CARD_FALLBACK)),
        action: Some(READ_MORE),
    }
}

pub fn client_card(client: &Client) -> Card {
    Card {
        kind: CardKind::Client,
        title: client.name.clone(),
        lines: vec![client.description.clone(), client.designation.clone()],
        image: Some(image(&client.image_url, &client.name, CLIENT_CARD_FALLBACK)),
        action: None,
    }
}

// =========================================================================
// Admin console
// =========================================================================

pub const ADMIN_PROJECTS: ListSpec<Project> = ListSpec {
    container: Container::ProjectsList,
    label: "projects",
    empty: "No projects added yet.",
    error: "Error loading projects.",
    render: project_item,
};

pub const ADMIN_CLIENTS: ListSpec<Client> = ListSpec {
    container: Container::ClientsList,
    label: "clients",
    empty: "No clients added yet.",
    error: "Error loading clients.",
    render: client_item,
};

pub const ADMIN_CONTACTS: ListSpec<Contact> = ListSpec {
    container: Container::ContactsList,
    label: "contacts",
    empty: "No contact submissions yet.",
    error: "Error loading contacts.",
    render: contact_item,
};

pub const ADMIN_NEWSLETTERS: ListSpec<NewsletterSubscription> = ListSpec {
    container: Container::NewslettersList,
    label: "newsletters",
    empty: "No newsletter subscriptions yet.",
    error: "Error loading newsletters.",
    render: newsletter_item,
};

pub fn project_item(project: &Project) -> Card {
    Card {
        kind: CardKind::ListItem,
        title: project.name.clone(),
        lines: vec![project.description.clone()],
        image: Some(image(&project.image_url, &project.name, LIST_ITEM_FALLBACK)),
        action: None,
    }
}

pub fn client_item(client: &Client) -> Card {
    Card {
        kind: CardKind::ListItem,
        title: client.name.clone(),
        lines: vec![
            format!("Designation: {}", client.designation),
            client.description.clone(),
        ],
        image: Some(image(&client.image_url, &client.name, LIST_ITEM_FALLBACK)),
        action: None,
    }
}

pub fn contact_item(contact: &Contact) -> Card {
    Card {
        kind: CardKind::Contact,
        title: contact.full_name.clone(),
        lines: vec![
            format!("Email: {}", contact.email),
            format!("Mobile: {}", contact.mobile_number),
            format!("City: {}", contact.city),
        ],
        image: None,
        action: None,
    }
}

pub fn newsletter_item(subscription: &NewsletterSubscription) -> Card {
    Card {
        kind: CardKind::Newsletter,
        title: subscription.email.clone(),
        lines: Vec::new(),
        image: None,
        action: None,
    }
}

fn image(src: &str, alt: &str, fallback: &'static str) -> CardImage {
    CardImage {
        src: src.to_string(),
        alt: alt.to_string(),
        fallback,
    }
}
