use lazy_static::lazy_static;
use scraper::Selector;

lazy_static! {
    pub static ref IMAGE: Selector = Selector::parse("img").unwrap();
}
