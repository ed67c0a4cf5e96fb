//! Everything the page displays: copy, catalogs and the image assets.
//!
//! Images are pre-generated at fixed sizes and served from `/assets/`; their
//! dimensions are part of the contract so the markup can reserve space for
//! them. A missing file simply shows as a broken image.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

impl Image {
    const fn new(src: &'static str, alt: &'static str, width: u32, height: u32) -> Self {
        Self { src, alt, width, height }
    }
}

pub const BRAND: &str = "Marvie Beauty";
pub const TAGLINE: &str =
    "Enhancing natural beauty through safe, trusted, and modern aesthetic treatments.";
pub const LOGO: Image = Image::new("/assets/marvie-logo.png", "Marvie Beauty logo", 160, 56);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Element id of the target section.
    pub section: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", section: "home" },
    NavItem { label: "About", section: "about" },
    NavItem { label: "Services", section: "services" },
    NavItem { label: "Testimonials", section: "testimonials" },
    NavItem { label: "Contact", section: "contact" },
];

pub const FOOTER_LINKS: [NavItem; 4] = [
    NavItem { label: "Services", section: "services" },
    NavItem { label: "About", section: "about" },
    NavItem { label: "Contact", section: "contact" },
    NavItem { label: "Privacy", section: "privacy" },
];

pub const HERO_SLIDES: [Image; 3] = [
    Image::new("/assets/hero-slide-1.webp", "Marvie Beauty - Natural beauty enhancement", 1920, 1080),
    Image::new("/assets/hero-slide-2.webp", "Marvie Beauty - Professional aesthetic treatments", 1920, 1080),
    Image::new("/assets/hero-slide-3.webp", "Marvie Beauty - Modern skincare solutions", 1920, 1080),
];

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Marvie Beauty Clinic is a modern aesthetic space specializing in skin treatments, face contouring, and body contouring. Our approach is safe, personalized, and results-focused, designed to elevate your natural beauty with refined precision.",
    "With over 2,000 clients cared for, we continue to uphold high standards of quality, comfort, and advanced aesthetic technology.",
    "Located in Jakarta and Bali, Marvie Beauty Clinic offers seamless access to premium treatments and a serene, elevated experience.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
    pub image: Image,
}

pub const SERVICES: [ServiceCard; 6] = [
    ServiceCard {
        title: "Facial Treatments",
        description: "Deep-cleansing, hydrating, and rejuvenating facials designed to restore skin clarity and glow. Tailored to each skin type for visible, lasting results.",
        image: Image::new("/assets/service-1.webp", "Facial Treatments", 1200, 800),
    },
    ServiceCard {
        title: "Acne & Skin Repair",
        description: "Targeted treatments to reduce breakouts, minimize scarring, and improve overall skin texture. Ideal for sensitive and acne-prone skin.",
        image: Image::new("/assets/service-2.webp", "Acne & Skin Repair", 1200, 800),
    },
    ServiceCard {
        title: "Anti-Aging Solutions",
        description: "Non-invasive procedures focused on tightening, lifting, and revitalizing the skin. Helps reduce fine lines, wrinkles, and signs of aging.",
        image: Image::new("/assets/service-3.webp", "Anti-Aging Solutions", 1200, 800),
    },
    ServiceCard {
        title: "Injectables (Non-Surgical Enhancements)",
        description: "Professional injectable treatments that enhance facial features while maintaining a natural appearance. Safe, subtle, and performed by qualified experts.",
        image: Image::new("/assets/service-4.webp", "Injectables (Non-Surgical Enhancements)", 1200, 800),
    },
    ServiceCard {
        title: "Laser Hair Removal",
        description: "Smooth, long-lasting hair reduction using advanced laser technology suitable for various skin types.",
        image: Image::new("/assets/service-5.webp", "Laser Hair Removal", 1200, 800),
    },
    ServiceCard {
        title: "Body Contouring",
        description: "Non-surgical sculpting solutions that reduce stubborn fat and improve body shape with minimal downtime.",
        image: Image::new("/assets/service-6.webp", "Body Contouring", 1200, 800),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeaturePanel {
    pub eyebrow: &'static str,
    pub title: [&'static str; 2],
    pub action: &'static str,
    /// `None` for the plain colour panel.
    pub image: Option<Image>,
}

pub const PROMO_PANEL: FeaturePanel = FeaturePanel {
    eyebrow: "Don't Miss It",
    title: ["Promo of", "the Month"],
    action: "Check Promo Now",
    image: Some(Image::new("/assets/promo-person.webp", "Happy client", 600, 800)),
};

pub const SIDE_PANELS: [FeaturePanel; 3] = [
    FeaturePanel {
        eyebrow: "Other Services",
        title: ["Beauty", "Packages"],
        action: "View Packages",
        image: None,
    },
    FeaturePanel {
        eyebrow: "Our Doctors",
        title: ["Meet Our", "Experts"],
        action: "Find Out",
        image: Some(Image::new("/assets/doctor-beforeafter.webp", "Treatment progression - before and after", 800, 400)),
    },
    FeaturePanel {
        eyebrow: "Comfort",
        title: ["Our", "Facilities"],
        action: "Learn More",
        image: Some(Image::new("/assets/facility.webp", "Our modern clinic facilities", 800, 400)),
    },
];

pub const REASONS: [&str; 5] = [
    "Certified and experienced aesthetic practitioners",
    "Modern equipment and clinically tested products",
    "Customized treatment plans for every client",
    "Safe, clean, and comfortable environment",
    "Consistent results with a natural finish",
];

pub const CERTIFICATIONS: [&str; 4] = [
    "Certified Aesthetic Practitioners",
    "FDA Approved Equipment",
    "Licensed Medical Professionals",
    "ISO Certified Clinic",
];

pub const SATISFIED_CLIENTS: &str = "1,000+";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub image: Image,
    pub rating: u8,
}

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        text: "Professional, clean, and the results were better than expected. The team made me feel comfortable from start to finish.",
        author: "S. Haryanti",
        image: Image::new("/assets/testimonial-1.webp", "S. Haryanti", 400, 400),
        rating: 5,
    },
    Testimonial {
        text: "I have tried many clinics, but Marvie Beauty gives the most natural and long-lasting results. Highly recommended.",
        author: "R. Santoso",
        image: Image::new("/assets/testimonial-2.webp", "R. Santoso", 400, 400),
        rating: 5,
    },
];

pub const GALLERY: [Image; 4] = [
    Image::new("/assets/gallery-1.webp", "Treatment result 1", 800, 800),
    Image::new("/assets/gallery-2.webp", "Treatment result 2", 800, 800),
    Image::new("/assets/gallery-3.webp", "Treatment result 3", 800, 800),
    Image::new("/assets/gallery-4.webp", "Treatment result 4", 800, 800),
];

pub struct ContactDetails {
    pub whatsapp_display: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub hours: &'static str,
    pub map_embed: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails {
    whatsapp_display: "+62 877 2913 8734",
    phone: "0877 2913 8734",
    email: "contact@marviebeauty.com",
    address: "Jl. Gunung Soputan I no.83, Pemecutan Klod, Denpasar Barat 80119",
    hours: "Mon–Sun, 10:00–20:00",
    map_embed: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3966.666666666667!2d106.8166!3d-6.2088!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zNsKwMTInMzEuNyJTIDEwNsKwNDgnNTkuOCJF!5e0!3m2!1sen!2sid!4v1234567890123!5m2!1sen!2sid",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink { name: "Instagram", href: "https://www.instagram.com/marviebeauty_by_dr.winayani" },
    SocialLink { name: "TikTok", href: "https://www.tiktok.com/@marviebeautybydrwinayani" },
];

/// Every pre-generated image the page references.
pub fn asset_catalog() -> Vec<Image> {
    let mut images = Vec::new();
    images.extend(HERO_SLIDES);
    images.extend(SERVICES.iter().map(|s| s.image));
    images.extend(PROMO_PANEL.image);
    images.extend(SIDE_PANELS.iter().filter_map(|p| p.image));
    images.extend(TESTIMONIALS.iter().map(|t| t.image));
    images.extend(GALLERY);
    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::Service;
    use std::collections::HashSet;

    #[test]
    fn catalog_paths_are_unique_webp_assets() {
        let catalog = asset_catalog();
        assert_eq!(catalog.len(), 18);

        let mut seen = HashSet::new();
        for image in &catalog {
            assert!(image.src.starts_with("/assets/"), "{}", image.src);
            assert!(image.src.ends_with(".webp"), "{}", image.src);
            assert!(seen.insert(image.src), "duplicate {}", image.src);
            assert!(!image.alt.is_empty());
        }
    }

    #[test]
    fn images_use_their_generated_sizes() {
        assert!(HERO_SLIDES.iter().all(|i| (i.width, i.height) == (1920, 1080)));
        assert!(SERVICES.iter().all(|s| (s.image.width, s.image.height) == (1200, 800)));
        assert!(TESTIMONIALS.iter().all(|t| (t.image.width, t.image.height) == (400, 400)));
        assert!(GALLERY.iter().all(|i| i.width == 800 && i.height == 800));
    }

    #[test]
    fn booking_choices_match_service_cards() {
        let cards: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        let choices: Vec<&str> = Service::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(cards, choices);
    }

    #[test]
    fn ratings_are_out_of_five() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
