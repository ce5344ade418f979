use std::fmt::{Display, Formatter};

const ICON_MARKERS: [&str; 2] = ["icon", "logo"];
const SCREENSHOT_MARKERS: [&str; 2] = ["screenshot", "screen"];
const APP_MARKERS: [&str; 6] = ["clinometer", "magnetmeter", "accelmeter", "isetsquare", "icontacts", "magichue"];

/// Output category of an image, one sub-directory each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Apps,
    Screenshots,
    Icons,
    Other,
}

/// All categories, in listing order.
pub const ALL_CATEGORIES: [Category; 4] = [Category::Apps, Category::Screenshots, Category::Icons, Category::Other];

impl Category {
    /// Classify an image URL. The first matching rule wins, so the order of the checks matters.
    pub fn classify(url: &str) -> Category {
        let url = url.to_lowercase();
        let contains_any = |markers: &[&str]| markers.iter().any(|m| url.contains(m));

        if contains_any(&ICON_MARKERS) {
            Category::Icons
        } else if contains_any(&SCREENSHOT_MARKERS) {
            Category::Screenshots
        } else if contains_any(&APP_MARKERS) {
            Category::Apps
        } else {
            Category::Other
        }
    }

    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Apps => "apps",
            Category::Screenshots => "screenshots",
            Category::Icons => "icons",
            Category::Other => "other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Category::classify("https://x.com/img/logo.png"), Category::Icons);
        assert_eq!(Category::classify("https://x.com/shots/screenshot1.jpg"), Category::Screenshots);
        assert_eq!(Category::classify("https://x.com/products/magnetmeter/hero.jpg"), Category::Apps);
        assert_eq!(Category::classify("https://x.com/misc/banner.png"), Category::Other);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(Category::classify("https://x.com/IMG/Logo.PNG"), Category::Icons);
        assert_eq!(Category::classify("https://x.com/MagicHue/main.jpg"), Category::Apps);
    }

    #[test]
    fn test_classify_precedence() {
        // Icons beat screenshots, screenshots beat apps
        assert_eq!(Category::classify("https://x.com/clinometer/screen-icon.png"), Category::Icons);
        assert_eq!(Category::classify("https://x.com/clinometer/screen1.png"), Category::Screenshots);
        // "icontacts" also contains "icon"
        assert_eq!(Category::classify("https://x.com/icontacts/main.png"), Category::Icons);
    }

    #[test]
    fn test_dir_names() {
        let names = ALL_CATEGORIES.iter().map(Category::dir_name).collect::<Vec<_>>();
        assert_eq!(names, vec!["apps", "screenshots", "icons", "other"]);
    }
}
