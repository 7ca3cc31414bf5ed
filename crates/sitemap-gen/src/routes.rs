use crate::model::{ChangeFrequency, StaticPage};

/// Every non-blog page the site router serves.
pub fn static_pages() -> Vec<StaticPage> {
    use ChangeFrequency::Monthly;

    vec![
        StaticPage::new("/"),
        StaticPage::new("/about"),
        StaticPage::new("/treatments"),
        StaticPage::new("/doctors"),
        StaticPage::new("/testimonials"),
        StaticPage::new("/why-ayurveda-hospital"),
        StaticPage::new("/dosha"),
        StaticPage::new("/blog"),
        StaticPage::new("/faq"),
        StaticPage::new("/booking"),
        // Local landing pages.
        StaticPage::with("/ayurveda-hospital-perumbakkam-chennai", 0.8, Monthly),
        StaticPage::with("/ayurveda-clinic-omr-chennai", 0.8, Monthly),
        StaticPage::with("/ayurveda-treatment-sholinganallur-chennai", 0.8, Monthly),
        StaticPage::with("/panchakarma-pallikaranai-chennai", 0.8, Monthly),
        StaticPage::with("/abhyanga-massage-navalur-chennai", 0.8, Monthly),
        StaticPage::with("/shirodhara-therapy-kelambakkam-chennai", 0.8, Monthly),
        StaticPage::with("/ayurveda-doctor-tambaram-chennai", 0.8, Monthly),
    ]
}
