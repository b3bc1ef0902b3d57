mod client;
mod contact;
mod data_url;
mod project;
