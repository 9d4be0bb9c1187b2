use wasm_bindgen::prelude::*;

mod cards;
mod chat;
mod flames;
mod menu;

use menu::MainMenu;

curtain_web::export_stage!(MainMenu, "showcase");
