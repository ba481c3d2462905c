pub mod chat_panel;
pub mod footer_bar;
pub mod goto_prompt;
pub mod help_bar;
pub mod nav_bar;
pub mod site_notice;
