//! Maps a resolved [`PageDescriptor`] to the page view that renders it.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::{App, AppMode};
use crate::domain::page::PageDescriptor;
use crate::ui::Page;
use crate::ui::pages;

/// Renders the body view for `page` using the app's current scroll offset.
pub fn render_page(f: &mut Frame, area: Rect, app: &App, page: &PageDescriptor) {
    let content = app.content();
    let scroll_offset = app.navigation().scroll_offset();

    match page {
        PageDescriptor::Home => {
            pages::home::HomePage::new(content, scroll_offset).render(f, area);
        }
        PageDescriptor::About => {
            pages::about::AboutPage::new(content, scroll_offset).render(f, area);
        }
        PageDescriptor::Governance => {
            pages::governance::GovernancePage::new(content, scroll_offset).render(f, area);
        }
        PageDescriptor::AcademicModel => {
            pages::academic_model::AcademicModelPage::new(content, scroll_offset).render(f, area);
        }
        PageDescriptor::ProgramList => {
            pages::program_list::ProgramListPage::new(content, scroll_offset).render(f, area);
        }
        PageDescriptor::ProgramDetail(program_id) => {
            pages::program_detail::ProgramDetailPage::new(content, program_id, scroll_offset)
                .render(f, area);
        }
        PageDescriptor::AdmissionsInfo => {
            pages::admissions::AdmissionsPage::new(content, scroll_offset).render(f, area);
        }
        PageDescriptor::PolicyList => {
            pages::policy_list::PolicyListPage::new(content, scroll_offset).render(f, area);
        }
        PageDescriptor::PolicyDetail(slug) => {
            pages::policy_detail::PolicyDetailPage::new(content, slug, scroll_offset)
                .render(f, area);
        }
        PageDescriptor::StaffDirectory => {
            pages::staff_directory::StaffDirectoryPage::new(content, scroll_offset)
                .render(f, area);
        }
        PageDescriptor::Contact => {
            let is_editing = app.mode == AppMode::ContactForm;

            pages::contact::ContactPage::new(content, &app.contact_form, is_editing, scroll_offset)
                .render(f, area);
        }
        PageDescriptor::NotFound(path) => {
            pages::not_found::NotFoundPage::new(content, path, scroll_offset).render(f, area);
        }
    }
}
