// SPDX-License-Identifier: MPL-2.0
//! The clinic's compiled-in content. Order is display order.

use super::{
    BlogPost, ComparableCase, ContactInfo, Differential, Icon, ImageRef, OpeningHours,
    SocialLink, TechStep, Testimonial, Treatment, TreatmentOption,
};

pub const HERO_IMAGE: ImageRef = ImageRef("professional_dentist_hero_image.png");

const DENTAL_CHAIR: ImageRef = ImageRef("luxury_dental_chair_treatment.png");
const FACIAL_TREATMENT: ImageRef = ImageRef("facial_aesthetic_treatment.png");
const DENTAL_WHITENING: ImageRef = ImageRef("dental_whitening_procedure.png");
const SKINCARE_ROOM: ImageRef = ImageRef("skincare_treatment_room.png");
const SCANNER_3D: ImageRef = ImageRef("3d_dental_scanner_technology.png");
const DIGITAL_SMILE: ImageRef = ImageRef("digital_smile_design_screen.png");
const CLEAR_ALIGNERS: ImageRef = ImageRef("clear_aligners_orthodontics.png");

/// Values accepted by the contact endpoint's `treatment` field.
pub const TREATMENT_OPTIONS: [TreatmentOption; 6] = [
    TreatmentOption {
        value: "odontologia-estetica",
        label: "Odontologia Estética",
    },
    TreatmentOption {
        value: "implantodontia",
        label: "Implantodontia Digital",
    },
    TreatmentOption {
        value: "estetica-facial",
        label: "Estética Facial",
    },
    TreatmentOption {
        value: "ortodontia",
        label: "Ortodontia Invisível",
    },
    TreatmentOption {
        value: "clareamento",
        label: "Clareamento Dental",
    },
    TreatmentOption {
        value: "outros",
        label: "Outros",
    },
];

/// Looks up a treatment option by its wire value.
#[must_use]
pub fn treatment_option(value: &str) -> Option<TreatmentOption> {
    TREATMENT_OPTIONS.iter().copied().find(|o| o.value == value)
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "Instagram",
        url: "https://instagram.com",
    },
    SocialLink {
        name: "Facebook",
        url: "https://facebook.com",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com",
    },
    SocialLink {
        name: "YouTube",
        url: "https://youtube.com",
    },
];

#[must_use]
pub fn treatments() -> Vec<Treatment> {
    vec![
        Treatment {
            id: "1",
            title: "Odontologia Estética",
            description: "Transforme seu sorriso com as técnicas mais avançadas em estética dental.",
            image: DENTAL_CHAIR,
            services: &[
                "Lentes de contato dental",
                "Clareamento avançado",
                "Harmonização do sorriso",
            ],
            featured: true,
        },
        Treatment {
            id: "2",
            title: "Implantodontia Digital",
            description: "Implantes com precisão milimétrica usando planejamento 3D e guias cirúrgicos.",
            image: SCANNER_3D,
            services: &[
                "Implantes com guia cirúrgico digital",
                "Carga imediata",
                "Prótese sobre implante",
            ],
            featured: false,
        },
        Treatment {
            id: "3",
            title: "Estética Facial",
            description: "Harmonização facial completa para realçar sua beleza natural.",
            image: FACIAL_TREATMENT,
            services: &[
                "Harmonização orofacial",
                "Toxina botulínica",
                "Preenchimento labial",
            ],
            featured: false,
        },
        Treatment {
            id: "4",
            title: "Ortodontia Invisível",
            description: "Alinhe seus dentes discretamente com tecnologia de ponta.",
            image: CLEAR_ALIGNERS,
            services: &[
                "Alinhadores transparentes",
                "Planejamento 3D",
                "Resultados previsíveis",
            ],
            featured: false,
        },
    ]
}

#[must_use]
pub fn differentials() -> Vec<Differential> {
    vec![
        Differential {
            id: "1",
            title: "Tecnologia de Ponta",
            description: "Equipamentos de última geração para diagnósticos precisos e tratamentos minimamente invasivos.",
            icon: Icon::Scanner,
        },
        Differential {
            id: "2",
            title: "Equipe Especializada",
            description: "Profissionais com certificações internacionais e em constante atualização.",
            icon: Icon::Team,
        },
        Differential {
            id: "3",
            title: "Atendimento Humanizado",
            description: "Ambiente acolhedor, escuta ativa e planos personalizados para cada paciente.",
            icon: Icon::Heart,
        },
    ]
}

#[must_use]
pub fn tech_steps() -> Vec<TechStep> {
    vec![
        TechStep {
            id: "1",
            title: "Escaneamento 3D",
            description: "Captura digital completa da sua boca em minutos",
            icon: Icon::Scan,
        },
        TechStep {
            id: "2",
            title: "Planejamento Digital",
            description: "Visualize seu resultado antes mesmo de começar",
            icon: Icon::Design,
        },
        TechStep {
            id: "3",
            title: "Execução Precisa",
            description: "Guias cirúrgicos e tratamentos milimétricos",
            icon: Icon::Precision,
        },
        TechStep {
            id: "4",
            title: "Acompanhamento App",
            description: "Monitore sua evolução pelo smartphone",
            icon: Icon::App,
        },
    ]
}

#[must_use]
pub fn result_cases() -> Vec<ComparableCase> {
    vec![
        ComparableCase {
            id: "1",
            title: "Transformação Completa do Sorriso",
            category: "Lentes de Contato Dental",
            duration: "2 semanas",
            before: DENTAL_CHAIR,
            after: DIGITAL_SMILE,
        },
        ComparableCase {
            id: "2",
            title: "Harmonização Facial Natural",
            category: "Preenchimento + Toxina Botulínica",
            duration: "1 sessão",
            before: FACIAL_TREATMENT,
            after: SKINCARE_ROOM,
        },
        ComparableCase {
            id: "3",
            title: "Clareamento Dental Premium",
            category: "Clareamento a Laser",
            duration: "1 hora",
            before: DENTAL_WHITENING,
            after: DENTAL_CHAIR,
        },
        ComparableCase {
            id: "4",
            title: "Alinhamento Discreto",
            category: "Ortodontia Invisível",
            duration: "6 meses",
            before: CLEAR_ALIGNERS,
            after: DIGITAL_SMILE,
        },
        ComparableCase {
            id: "5",
            title: "Rejuvenescimento Facial",
            category: "Harmonização Orofacial",
            duration: "1 sessão",
            before: SKINCARE_ROOM,
            after: FACIAL_TREATMENT,
        },
        ComparableCase {
            id: "6",
            title: "Sorriso Renovado",
            category: "Facetas de Porcelana",
            duration: "3 semanas",
            before: DIGITAL_SMILE,
            after: DENTAL_WHITENING,
        },
    ]
}

#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1",
            name: "Maria Silva",
            age: 34,
            text: "Minha experiência na Essence foi transformadora! O atendimento humanizado e a tecnologia de ponta fizeram toda a diferença. Hoje tenho o sorriso dos meus sonhos.",
            rating: 5,
            treatment: "Lentes de Contato",
        },
        Testimonial {
            id: "2",
            name: "Carlos Santos",
            age: 45,
            text: "Depois de anos com medo de dentista, encontrei na Essence um ambiente acolhedor. A equipe é excepcional e os resultados superaram minhas expectativas.",
            rating: 5,
            treatment: "Implante Dentário",
        },
        Testimonial {
            id: "3",
            name: "Ana Paula Costa",
            age: 28,
            text: "A harmonização facial mudou minha autoestima! Os profissionais são incríveis e o resultado ficou super natural. Recomendo de olhos fechados.",
            rating: 5,
            treatment: "Harmonização Facial",
        },
        Testimonial {
            id: "4",
            name: "Roberto Lima",
            age: 52,
            text: "O clareamento ficou perfeito! Tratamento rápido, indolor e com resultados impressionantes. A clínica é linda e moderna.",
            rating: 5,
            treatment: "Clareamento Dental",
        },
        Testimonial {
            id: "5",
            name: "Juliana Ferreira",
            age: 31,
            text: "Fiz o tratamento com alinhadores invisíveis e foi a melhor decisão! Ninguém percebe que estou usando e meus dentes já estão muito mais alinhados.",
            rating: 5,
            treatment: "Ortodontia Invisível",
        },
    ]
}

#[must_use]
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1",
            title: "5 Mitos Sobre Implantes Dentários Desvendados",
            excerpt: "Descubra a verdade por trás dos mitos mais comuns sobre implantes e tome uma decisão informada.",
            category: "Implantodontia",
            image: SCANNER_3D,
            date: "2024-12-05",
            slug: "mitos-implantes-dentarios",
        },
        BlogPost {
            id: "2",
            title: "Harmonização Facial: O Que Você Precisa Saber",
            excerpt: "Tudo sobre os procedimentos de harmonização e como eles podem realçar sua beleza natural.",
            category: "Estética Facial",
            image: FACIAL_TREATMENT,
            date: "2024-12-01",
            slug: "harmonizacao-facial-guia",
        },
        BlogPost {
            id: "3",
            title: "Tecnologia 3D: A Revolução na Odontologia",
            excerpt: "Como a tecnologia 3D está transformando os tratamentos odontológicos e proporcionando resultados mais precisos.",
            category: "Tecnologia",
            image: DIGITAL_SMILE,
            date: "2024-11-28",
            slug: "tecnologia-3d-odontologia",
        },
    ]
}

#[must_use]
pub fn contact_info() -> ContactInfo {
    ContactInfo {
        whatsapp: "+55 11 99999-9999",
        phone: "+55 11 3333-3333",
        email: "contato@essenceclinic.com.br",
        address: "Av. Paulista, 1000 - São Paulo, SP",
        hours: OpeningHours {
            weekdays: "08:00 - 20:00",
            saturday: "09:00 - 14:00",
            sunday: "Fechado",
        },
    }
}
