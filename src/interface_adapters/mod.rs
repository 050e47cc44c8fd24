// Interface adapters: the products API client, the page renderer and the HTTP surface.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod render;
pub mod routes;
pub mod state;
