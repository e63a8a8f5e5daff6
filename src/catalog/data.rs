//! Compiled-in catalog of Salesforce Lightning Design System components.
//!
//! Some records still name groups (`modals`, `tables`, `alerts`, `badges`)
//! that have no category entry. They are kept so search can find them.

use super::{Category, ComponentRecord};

const IMAGE_BASE: &str = "https://image.dream.snhu.edu/lib/fe9213737461067576/m/1";

fn image(file: &str) -> String {
    format!("{}/{}", IMAGE_BASE, file)
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: "buttons".into(),
            name: "Buttons".into(),
            icon: "mouse-pointer-click".into(),
            description: "Interactive button components for actions and navigation".into(),
        },
        Category {
            id: "cards".into(),
            name: "Cards".into(),
            icon: "square".into(),
            description: "Container components for grouping related content".into(),
        },
        Category {
            id: "images".into(),
            name: "Images".into(),
            icon: "image".into(),
            description: "Image and media components for visual content".into(),
        },
        Category {
            id: "navigation".into(),
            name: "Navigation".into(),
            icon: "menu".into(),
            description: "Components for site navigation and wayfinding".into(),
        },
        Category {
            id: "videos".into(),
            name: "Videos".into(),
            icon: "video".into(),
            description: "Video and media components for visual content".into(),
        },
        Category {
            id: "icons".into(),
            name: "Icons".into(),
            icon: "bell".into(),
            description: "Icons for actions, status, and visual cues".into(),
        },
    ]
}

pub fn components() -> Vec<ComponentRecord> {
    vec![
        // Buttons
        ComponentRecord {
            id: "btn-primary".into(),
            name: "Primary Button".into(),
            group: "buttons".into(),
            description: "The main call-to-action button used for primary actions like Save or Submit.".into(),
            preview_image_url: image("95dfb2f7-9d00-401a-b6ab-41a8f4e6a8c6.png"),
            tags: tags(&["action", "cta", "submit"]),
            markup: r#"<button class="slds-button slds-button_brand">
  Save
</button>"#
                .into(),
            notes: "Use for the most important action on the page. Limit to one per section.".into(),
        },
        ComponentRecord {
            id: "btn-secondary".into(),
            name: "Secondary Button Rounded".into(),
            group: "buttons".into(),
            description: "A neutral button for secondary actions like Cancel or Back.".into(),
            preview_image_url: image("e38483be-e03a-4d00-a86c-816b7563eb7d.png"),
            tags: tags(&["button", "round", "cancel"]),
            markup: r#"<button class="slds-button slds-button_neutral">
  Cancel
</button>"#
                .into(),
            notes: "Use alongside primary buttons for alternative actions.".into(),
        },
        // Videos
        ComponentRecord {
            id: "campus-tours".into(),
            name: "SNHU Campus Tours".into(),
            group: "videos".into(),
            description: "A compact button with only an icon, ideal for toolbars.".into(),
            preview_image_url: image("50af8ead-2150-424f-838c-08f4bce796f9.gif"),
            tags: tags(&["video", "snhu campus tours", "campus life"]),
            markup: r#"<button class="slds-button slds-button_icon">
  <svg class="slds-button__icon">...</svg>
</button>"#
                .into(),
            notes: "Always include accessible labels via aria-label.".into(),
        },
        // Cards
        ComponentRecord {
            id: "card-rounded".into(),
            name: "Rounded Card with Icon".into(),
            group: "cards".into(),
            description: "A simple card container with header, body, and optional footer.".into(),
            preview_image_url: image("32a5dc76-a2a8-4b07-a1ed-ab239f95396f.png"),
            tags: tags(&["rounded card", "icon", "card"]),
            markup: r#"<article class="slds-card">
  <div class="slds-card__header">
    <h2>Card Title</h2>
  </div>
  <div class="slds-card__body">
    Card content goes here
  </div>
</article>"#
                .into(),
            notes: "The fundamental container for grouping related content.".into(),
        },
        ComponentRecord {
            id: "card-empty".into(),
            name: "Empty State Card".into(),
            group: "cards".into(),
            description: "A card displaying an empty state with illustration and action.".into(),
            preview_image_url: String::new(),
            tags: tags(&["empty", "illustration", "cta"]),
            markup: r#"<article class="slds-card slds-card_empty">
  <div class="slds-card__body">
    <img src="empty.svg" alt="" />
    <p>No items to display</p>
    <button class="slds-button">Add Item</button>
  </div>
</article>"#
                .into(),
            notes: "Always provide a clear action to help users populate the empty state.".into(),
        },
        // Images
        ComponentRecord {
            id: "header-img1".into(),
            name: "Header Image 1".into(),
            group: "images".into(),
            description: "A standard text input field with label and optional help text.".into(),
            preview_image_url: image("6a06c6f7-32cd-41f1-af14-b3c11f00c3d8.png"),
            tags: tags(&["header", "images", "hero"]),
            markup: format!(
                r#"<img class="slds-form-element" src="{}" alt="Travis Smiling header" />"#,
                image("6a06c6f7-32cd-41f1-af14-b3c11f00c3d8.png")
            ),
            notes: "Always include a visible label for accessibility.".into(),
        },
        ComponentRecord {
            id: "header-img2".into(),
            name: "Header Image 2".into(),
            group: "images".into(),
            description: "A standard text input field with label and optional help text.".into(),
            preview_image_url: image("63c3a605-53a1-4cf6-8694-b24233bd3dc7.png"),
            tags: tags(&["header", "images", "hero"]),
            markup: format!(
                r#"<img class="slds-form-element" src="{}" alt="Travis Smiling header" />"#,
                image("63c3a605-53a1-4cf6-8694-b24233bd3dc7.png")
            ),
            notes: "Always include a visible label for accessibility.".into(),
        },
        ComponentRecord {
            id: "student-on-phone".into(),
            name: "Student Looking on Phone".into(),
            group: "images".into(),
            description: "A checkbox input for boolean or multi-select options.".into(),
            preview_image_url: image("78ea1544-12c3-41ee-ab1b-83c37c99592c.jpg"),
            tags: tags(&["checkbox", "toggle", "boolean"]),
            markup: r#"<div class="slds-form-element">
  <div class="slds-form-element__control">
    <div class="slds-checkbox">
      <input type="checkbox" id="check1" />
      <label for="check1">Accept terms</label>
    </div>
  </div>
</div>"#
                .into(),
            notes: "Use for optional settings or multi-select scenarios.".into(),
        },
        // Modals
        ComponentRecord {
            id: "modal-basic".into(),
            name: "Basic Modal".into(),
            group: "modals".into(),
            description: "A standard modal dialog for focused interactions.".into(),
            preview_image_url: String::new(),
            tags: tags(&["dialog", "overlay", "popup"]),
            markup: r#"<section class="slds-modal slds-fade-in-open">
  <div class="slds-modal__container">
    <header class="slds-modal__header">
      <h2>Modal Title</h2>
    </header>
    <div class="slds-modal__content">
      Modal content
    </div>
    <footer class="slds-modal__footer">
      <button>Cancel</button>
      <button>Save</button>
    </footer>
  </div>
</section>"#
                .into(),
            notes: "Use modals sparingly. Consider inline editing for simple changes.".into(),
        },
        ComponentRecord {
            id: "modal-confirm".into(),
            name: "Confirmation Modal".into(),
            group: "modals".into(),
            description: "A modal for confirming user actions, especially destructive ones.".into(),
            preview_image_url: String::new(),
            tags: tags(&["confirm", "warning", "dialog"]),
            markup: r#"<section class="slds-modal">
  <div class="slds-modal__container">
    <header class="slds-modal__header">
      <h2>Confirm Delete</h2>
    </header>
    <div class="slds-modal__content">
      Are you sure you want to delete this item?
    </div>
    <footer class="slds-modal__footer">
      <button>Cancel</button>
      <button class="slds-button_destructive">Delete</button>
    </footer>
  </div>
</section>"#
                .into(),
            notes: "Always offer a clear way to cancel. Make the action button descriptive.".into(),
        },
        // Navigation
        ComponentRecord {
            id: "nav-tabs".into(),
            name: "Tabs".into(),
            group: "navigation".into(),
            description: "Horizontal tabs for switching between related views.".into(),
            preview_image_url: String::new(),
            tags: tags(&["tabs", "horizontal", "switch"]),
            markup: r##"<div class="slds-tabs_default">
  <ul class="slds-tabs_default__nav">
    <li class="slds-tabs_default__item slds-is-active">
      <a href="#">Tab 1</a>
    </li>
    <li class="slds-tabs_default__item">
      <a href="#">Tab 2</a>
    </li>
  </ul>
</div>"##
                .into(),
            notes: "Use for content that is related but doesn't need to be viewed simultaneously.".into(),
        },
        ComponentRecord {
            id: "nav-breadcrumb".into(),
            name: "Breadcrumb".into(),
            group: "navigation".into(),
            description: "A breadcrumb trail showing the current location in hierarchy.".into(),
            preview_image_url: String::new(),
            tags: tags(&["breadcrumb", "hierarchy", "trail"]),
            markup: r##"<nav class="slds-breadcrumb" aria-label="Breadcrumb">
  <ol class="slds-breadcrumb__list">
    <li class="slds-breadcrumb__item">
      <a href="#">Home</a>
    </li>
    <li class="slds-breadcrumb__item">
      <a href="#">Accounts</a>
    </li>
  </ol>
</nav>"##
                .into(),
            notes: "Keep breadcrumbs to 4-5 levels maximum for usability.".into(),
        },
        ComponentRecord {
            id: "nav-vertical".into(),
            name: "Vertical Navigation".into(),
            group: "navigation".into(),
            description: "A vertical list of navigation links for sidebars.".into(),
            preview_image_url: String::new(),
            tags: tags(&["vertical", "sidebar", "menu"]),
            markup: r##"<nav class="slds-nav-vertical">
  <ul class="slds-nav-vertical__section">
    <li class="slds-nav-vertical__item slds-is-active">
      <a href="#">Dashboard</a>
    </li>
    <li class="slds-nav-vertical__item">
      <a href="#">Reports</a>
    </li>
  </ul>
</nav>"##
                .into(),
            notes: "Highlight the current page clearly. Group related items together.".into(),
        },
        // Tables
        ComponentRecord {
            id: "table-basic".into(),
            name: "Basic Table".into(),
            group: "tables".into(),
            description: "A simple data table with rows and columns.".into(),
            preview_image_url: String::new(),
            tags: tags(&["data", "grid", "rows"]),
            markup: r#"<table class="slds-table slds-table_bordered">
  <thead>
    <tr>
      <th>Name</th>
      <th>Email</th>
    </tr>
  </thead>
  <tbody>
    <tr>
      <td>John Doe</td>
      <td>john@example.com</td>
    </tr>
  </tbody>
</table>"#
                .into(),
            notes: "Use for structured data that benefits from column alignment.".into(),
        },
        ComponentRecord {
            id: "table-striped".into(),
            name: "Striped Table".into(),
            group: "tables".into(),
            description: "A table with alternating row colors for easier scanning.".into(),
            preview_image_url: String::new(),
            tags: tags(&["data", "striped", "alternating"]),
            markup: r#"<table class="slds-table slds-table_striped">
  <thead>...</thead>
  <tbody>...</tbody>
</table>"#
                .into(),
            notes: "Striped tables improve readability for tables with many rows.".into(),
        },
        ComponentRecord {
            id: "table-sortable".into(),
            name: "Sortable Table".into(),
            group: "tables".into(),
            description: "A table with sortable column headers.".into(),
            preview_image_url: String::new(),
            tags: tags(&["data", "sortable", "interactive"]),
            markup: r##"<table class="slds-table slds-table_bordered">
  <thead>
    <tr>
      <th class="slds-is-sortable">
        <a href="#">Name</a>
        <span class="slds-icon">↑</span>
      </th>
    </tr>
  </thead>
</table>"##
                .into(),
            notes: "Indicate sort direction clearly. Default to a logical sort order.".into(),
        },
        // Icons
        ComponentRecord {
            id: "icon-1".into(),
            name: "Icon 1".into(),
            group: "icons".into(),
            description: "An informational icon for general notifications.".into(),
            preview_image_url: image("fd53a586-c4eb-4802-b02d-03974d4fe5a5.png"),
            tags: tags(&["icon", "notification", "message"]),
            markup: info_alert_markup(),
            notes: "Icon for step 1.".into(),
        },
        ComponentRecord {
            id: "icon-checkmark".into(),
            name: "Icon Checkmark".into(),
            group: "icons".into(),
            description: "An informational icon for general notifications.".into(),
            preview_image_url: image("b72ff5a6-b22e-4166-9422-a8d37c2a7fa0.png"),
            tags: tags(&["icon", "checkmark", "message"]),
            markup: info_alert_markup(),
            notes: "Icon for checkmark.".into(),
        },
        ComponentRecord {
            id: "icon-checklist".into(),
            name: "Icon Checklist".into(),
            group: "icons".into(),
            description: "An informational icon for general notifications.".into(),
            preview_image_url: image("6f12607c-4990-4bb2-8d5b-edccfc5fdffb.png"),
            tags: tags(&["icon", "checklist", "message"]),
            markup: info_alert_markup(),
            notes: "Icon for checklist items.".into(),
        },
        // Alerts
        ComponentRecord {
            id: "alert-error".into(),
            name: "Error Alert".into(),
            group: "alerts".into(),
            description: "An error alert for critical issues requiring attention.".into(),
            preview_image_url: String::new(),
            tags: tags(&["error", "critical", "problem"]),
            markup: r#"<div class="slds-notify slds-notify_alert slds-alert_error">
  <span class="slds-icon">✕</span>
  <h2>Failed to save record. Please try again.</h2>
</div>"#
                .into(),
            notes: "Always explain what went wrong and how to fix it.".into(),
        },
        // Badges
        ComponentRecord {
            id: "badge-default".into(),
            name: "Default Badge".into(),
            group: "badges".into(),
            description: "A neutral badge for displaying counts or labels.".into(),
            preview_image_url: String::new(),
            tags: tags(&["label", "count", "neutral"]),
            markup: r#"<span class="slds-badge">42</span>"#.into(),
            notes: "Keep badge text short - ideally 2-3 characters for counts.".into(),
        },
        ComponentRecord {
            id: "badge-success".into(),
            name: "Success Badge".into(),
            group: "badges".into(),
            description: "A green badge indicating success or active status.".into(),
            preview_image_url: String::new(),
            tags: tags(&["success", "active", "status"]),
            markup: r#"<span class="slds-badge slds-badge_success">Active</span>"#.into(),
            notes: "Use sparingly to highlight positive states.".into(),
        },
        ComponentRecord {
            id: "badge-warning".into(),
            name: "Warning Badge".into(),
            group: "badges".into(),
            description: "An orange badge indicating a warning or pending status.".into(),
            preview_image_url: String::new(),
            tags: tags(&["warning", "pending", "status"]),
            markup: r#"<span class="slds-badge slds-badge_warning">Pending</span>"#.into(),
            notes: "Use for states that require attention but aren't critical.".into(),
        },
        ComponentRecord {
            id: "badge-error".into(),
            name: "Error Badge".into(),
            group: "badges".into(),
            description: "A red badge indicating an error or inactive status.".into(),
            preview_image_url: String::new(),
            tags: tags(&["error", "inactive", "status"]),
            markup: r#"<span class="slds-badge slds-badge_error">Inactive</span>"#.into(),
            notes: "Reserve for critical states or errors.".into(),
        },
    ]
}

fn info_alert_markup() -> String {
    r#"<div class="slds-notify slds-notify_alert slds-alert_info">
  <span class="slds-icon">ℹ️</span>
  <h2>System maintenance scheduled for Sunday.</h2>
</div>"#
        .to_string()
}
