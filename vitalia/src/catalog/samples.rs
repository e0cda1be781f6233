//! Built-in demo catalog, served when no backend is configured.

use uuid::Uuid;
use vitalia_api::endpoints::destinations::{City, CitySummary, Country, CountrySummary};
use vitalia_api::endpoints::programs::{FacilitySummary, Program, ProgramCategory};
use vitalia_api::endpoints::Amount;

fn switzerland() -> CountrySummary {
    CountrySummary {
        id: Uuid::from_u128(0xC1),
        name: "Switzerland".to_string(),
        code: "ch".to_string(),
    }
}

fn indonesia() -> CountrySummary {
    CountrySummary {
        id: Uuid::from_u128(0xC2),
        name: "Indonesia".to_string(),
        code: "id".to_string(),
    }
}

fn portugal() -> CountrySummary {
    CountrySummary {
        id: Uuid::from_u128(0xC3),
        name: "Portugal".to_string(),
        code: "pt".to_string(),
    }
}

fn japan() -> CountrySummary {
    CountrySummary {
        id: Uuid::from_u128(0xC4),
        name: "Japan".to_string(),
        code: "jp".to_string(),
    }
}

pub fn programs() -> Vec<Program> {
    vec![
        Program {
            id: Uuid::from_u128(0xA1),
            slug: "alpine-longevity-retreat".to_string(),
            title: "Alpine Longevity Retreat".to_string(),
            subtitle: Some("Seven days of diagnostics, altitude training and recovery".to_string()),
            description: Some(
                "A clinical longevity program combining full-body diagnostics, \
                 supervised altitude training and personalised nutrition planning, \
                 led by the resident physician team."
                    .to_string(),
            ),
            category: ProgramCategory::Longevity,
            duration_days: 7,
            price: Amount::new(349900),
            currency: "CHF".to_string(),
            rating: Some(4.9),
            hero_image: Some("/images/samples/alpine.jpg".to_string()),
            gallery: vec![
                "/images/samples/alpine-1.jpg".to_string(),
                "/images/samples/alpine-2.jpg".to_string(),
            ],
            facility: FacilitySummary {
                id: Uuid::from_u128(0xF1),
                name: "Clinique Mont Clair".to_string(),
                logo: None,
            },
            city: City {
                id: Uuid::from_u128(0xB1),
                name: "St. Moritz".to_string(),
                country: switzerland(),
            },
            featured: true,
        },
        Program {
            id: Uuid::from_u128(0xA2),
            slug: "ubud-detox-immersion".to_string(),
            title: "Ubud Detox Immersion".to_string(),
            subtitle: Some("Ten days of plant-based cleansing in the rice terraces".to_string()),
            description: Some(
                "A guided detox built around plant-based meals, daily yoga and \
                 traditional Balinese treatments, with a resident nutritionist \
                 adjusting the protocol every morning."
                    .to_string(),
            ),
            category: ProgramCategory::Detox,
            duration_days: 10,
            price: Amount::new(189000),
            currency: "USD".to_string(),
            rating: Some(4.7),
            hero_image: Some("/images/samples/ubud.jpg".to_string()),
            gallery: vec!["/images/samples/ubud-1.jpg".to_string()],
            facility: FacilitySummary {
                id: Uuid::from_u128(0xF2),
                name: "Taman Sari Sanctuary".to_string(),
                logo: None,
            },
            city: City {
                id: Uuid::from_u128(0xB2),
                name: "Ubud".to_string(),
                country: indonesia(),
            },
            featured: true,
        },
        Program {
            id: Uuid::from_u128(0xA3),
            slug: "algarve-medical-spa-week".to_string(),
            title: "Algarve Medical Spa Week".to_string(),
            subtitle: None,
            description: Some(
                "Six days of thalassotherapy and physiotherapy on the Atlantic \
                 coast, bookended by medical check-ups."
                    .to_string(),
            ),
            category: ProgramCategory::MedicalSpa,
            duration_days: 6,
            price: Amount::new(265050),
            currency: "EUR".to_string(),
            rating: Some(4.6),
            hero_image: None,
            gallery: vec![],
            facility: FacilitySummary {
                id: Uuid::from_u128(0xF3),
                name: "Costa Verde Clinic".to_string(),
                logo: None,
            },
            city: City {
                id: Uuid::from_u128(0xB3),
                name: "Lagos".to_string(),
                country: portugal(),
            },
            featured: false,
        },
        Program {
            id: Uuid::from_u128(0xA4),
            slug: "kyoto-mindfulness-reset".to_string(),
            title: "Kyoto Mindfulness Reset".to_string(),
            subtitle: Some("Five quiet days of zazen, forest walks and tea".to_string()),
            description: None,
            category: ProgramCategory::MentalWellness,
            duration_days: 5,
            price: Amount::new(0),
            currency: "EUR".to_string(),
            rating: None,
            hero_image: Some("/images/samples/kyoto.jpg".to_string()),
            gallery: vec![],
            facility: FacilitySummary {
                id: Uuid::from_u128(0xF4),
                name: "Arashiyama Wellness House".to_string(),
                logo: None,
            },
            city: City {
                id: Uuid::from_u128(0xB4),
                name: "Kyoto".to_string(),
                country: japan(),
            },
            featured: false,
        },
    ]
}

pub fn countries() -> Vec<Country> {
    vec![
        Country {
            id: Uuid::from_u128(0xC1),
            name: "Switzerland".to_string(),
            code: "ch".to_string(),
            hero_image: Some("/images/samples/switzerland.jpg".to_string()),
            cities: vec![CitySummary {
                id: Uuid::from_u128(0xB1),
                name: "St. Moritz".to_string(),
                program_count: 1,
            }],
            program_count: 1,
        },
        Country {
            id: Uuid::from_u128(0xC2),
            name: "Indonesia".to_string(),
            code: "id".to_string(),
            hero_image: Some("/images/samples/indonesia.jpg".to_string()),
            cities: vec![CitySummary {
                id: Uuid::from_u128(0xB2),
                name: "Ubud".to_string(),
                program_count: 1,
            }],
            program_count: 1,
        },
        Country {
            id: Uuid::from_u128(0xC3),
            name: "Portugal".to_string(),
            code: "pt".to_string(),
            hero_image: None,
            cities: vec![CitySummary {
                id: Uuid::from_u128(0xB3),
                name: "Lagos".to_string(),
                program_count: 1,
            }],
            program_count: 1,
        },
        Country {
            id: Uuid::from_u128(0xC4),
            name: "Japan".to_string(),
            code: "jp".to_string(),
            hero_image: Some("/images/samples/japan.jpg".to_string()),
            cities: vec![CitySummary {
                id: Uuid::from_u128(0xB4),
                name: "Kyoto".to_string(),
                program_count: 1,
            }],
            program_count: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_and_slugs_are_unique() {
        let programs = programs();
        let ids: HashSet<_> = programs.iter().map(|p| p.id).collect();
        let slugs: HashSet<_> = programs.iter().map(|p| p.slug.clone()).collect();
        assert_eq!(ids.len(), programs.len());
        assert_eq!(slugs.len(), programs.len());
    }

    #[test]
    fn every_sample_city_has_a_country_entry() {
        let countries = countries();
        for program in programs() {
            assert!(
                countries
                    .iter()
                    .any(|c| c.id == program.city.country.id
                        && c.cities.iter().any(|city| city.id == program.city.id)),
                "city {} missing from sample countries",
                program.city.name
            );
        }
    }
}
