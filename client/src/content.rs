//! Static invitation content shared by every theme.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Page sections, in their canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Invitation,
    Couple,
    Story,
    Events,
    Gallery,
    Wishes,
}

impl SectionId {
    /// DOM id and anchor fragment.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        section_config(self).id
    }
}

/// Navigation metadata for one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionConfig {
    pub id: &'static str,
    pub label: &'static str,
    /// Inner SVG markup drawn in a 24x24 viewBox.
    pub icon: &'static str,
}

#[must_use]
pub fn section_config(section: SectionId) -> SectionConfig {
    match section {
        SectionId::Invitation => SectionConfig {
            id: "undangan",
            label: "Undangan",
            icon: r#"<rect x="4" y="6" width="16" height="12" rx="2" ry="2"/><path d="M4 8l8 5 8-5"/>"#,
        },
        SectionId::Couple => SectionConfig {
            id: "mempelai",
            label: "Mempelai",
            icon: r#"<circle cx="8" cy="8.5" r="3.5"/><circle cx="16" cy="8.5" r="3.5"/><path d="M4.5 19c0-2.5 1.8-4.5 3.5-4.5h8c1.7 0 3.5 2 3.5 4.5"/>"#,
        },
        SectionId::Story => SectionConfig {
            id: "cerita",
            label: "Cerita",
            icon: r#"<circle cx="12" cy="12" r="8"/><path d="M12 8v4l2.5 2.5"/>"#,
        },
        SectionId::Events => SectionConfig {
            id: "akad-resepsi",
            label: "Akad & Resepsi",
            icon: r#"<path d="M4 10l8-6 8 6v10H4z"/><path d="M10 18h4"/>"#,
        },
        SectionId::Gallery => SectionConfig {
            id: "galeri",
            label: "Galeri",
            icon: r#"<rect x="3" y="5" width="18" height="14" rx="2" ry="2"/><path d="M3 14l4-3 4 4 3-3 5 4"/><circle cx="8.5" cy="9.5" r="1.5"/>"#,
        },
        SectionId::Wishes => SectionConfig {
            id: "wishes",
            label: "Ucapan",
            icon: r#"<rect x="4" y="5" width="16" height="14" rx="2" ry="2"/><path d="M4 9l8 4 8-4"/>"#,
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct OverlayCopy {
    pub subtitle: Option<&'static str>,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub button_label: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct CoupleProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub parents: &'static str,
    pub description: &'static str,
    pub image_src: &'static str,
    pub image_alt: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct CeremonyEvent {
    pub title: &'static str,
    pub schedule: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Venue {
    pub name: &'static str,
    pub address: &'static str,
    pub maps_url: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct GiftInfo {
    pub intro: &'static str,
    pub bank_name: &'static str,
    pub account_number: &'static str,
    pub account_holder: &'static str,
    pub envelope_note: &'static str,
    pub confirm_url: &'static str,
    pub qr_src: &'static str,
    pub qr_alt: &'static str,
    pub qr_note: &'static str,
}

pub const OVERLAY: OverlayCopy = OverlayCopy {
    subtitle: Some("Wedding Invitation"),
    title: "Rizky & Entin",
    description: Some("Kami mengundang Anda untuk menjadi bagian dari perjalanan kami."),
    button_label: Some("Buka Undangan"),
};

pub const VERSE_ARABIC: &str = "وَمِنْ آيَاتِهِ أَنْ خَلَقَ لَكُمْ مِنْ أَنْفُسِكُمْ أَزْوَاجًا لِتَسْكُنُوا إِلَيْهَا وَجَعَلَ بَيْنَكُمْ مَوَدَّةً وَرَحْمَةً";

pub const VERSE_TRANSLATION: &str = "\"Dan di antara tanda-tanda (kebesaran)-Nya adalah Dia menciptakan pasangan-pasangan untukmu dari jenismu sendiri, agar kamu cenderung dan merasa tenteram kepadanya, dan Dia menjadikan di antaramu rasa kasih dan sayang.\" (QS. Ar-Rum: 21)";

pub const COUPLE: [CoupleProfile; 2] = [
    CoupleProfile {
        id: "bride",
        name: "Entin Endah Cahyati",
        role: "Mempelai Wanita",
        parents: "Putri pertama dari Bapak Jikan & Ibu Sumiyati",
        description: "Entin tumbuh di Surabaya dengan kecintaan pada fotografi serta seni dekorasi. Ia kini berkarya sebagai desainer interior yang menghadirkan ruang nyaman untuk keluarga.",
        image_src: "/gallery/photo-07.svg",
        image_alt: "Potret Entin Endah Cahyati",
    },
    CoupleProfile {
        id: "groom",
        name: "Rizky Suhaimi",
        role: "Mempelai Pria",
        parents: "Putra pertama dari Bapak Eka & Ibu Hera",
        description: "Rizky besar di Bandung dengan passion pada teknologi dan storytelling. Ia menyalurkan kreasinya lewat usaha media digital yang dirintis bersama sahabat-sahabatnya.",
        image_src: "/gallery/photo-08.svg",
        image_alt: "Potret Rizky Suhaimi",
    },
];

pub const TIMELINE: [TimelineEvent; 3] = [
    TimelineEvent {
        year: "2016",
        title: "Pertemuan Pertama",
        description: "Kami bertemu di Bandung pada sebuah kegiatan kampus dan mulai berbagi mimpi yang sama.",
    },
    TimelineEvent {
        year: "2019",
        title: "Langkah Bersama",
        description: "Memulai karier di Jakarta dan saling mendukung dalam proses tumbuh bersama keluarga.",
    },
    TimelineEvent {
        year: "2024",
        title: "Lamaran",
        description: "Prosesi lamaran berlangsung hangat di rumah keluarga dengan kehadiran keluarga terdekat.",
    },
];

pub const CEREMONIES: [CeremonyEvent; 2] = [
    CeremonyEvent {
        title: "Akad Nikah",
        schedule: "Jumat, 26 Desember 2025 • 09.00 WIB",
        description: "Prosesi akad nikah berlangsung khidmat dan penuh doa bersama keluarga inti.",
    },
    CeremonyEvent {
        title: "Resepsi",
        schedule: "Sabtu, 27 Desember 2025 • 18.00 WIB",
        description: "Sesi ramah tamah dan silaturahmi bersama keluarga, kerabat, dan sahabat dekat.",
    },
];

pub const VENUE: Venue = Venue {
    name: "Kediaman Keluarga Jikan",
    address: "Dusun Mulyorejo Rt.2 Rw.2 Desa Wringinrejo, Kecamatan Gambiran, Banyuwangi 68486",
    maps_url: "https://www.google.com/maps/place/Jl.+Melati+No.+45,+Banyuwangi",
};

pub const GIFT: GiftInfo = GiftInfo {
    intro: "Kehadiran dan doa Anda sudah sangat berarti. Bagi yang ingin berbagi tanda kasih, berikut informasi rekening dan e-wallet yang dapat digunakan.",
    bank_name: "Bank BCA",
    account_number: "1234567890",
    account_holder: "Entin Endah Cahyati",
    envelope_note: "Scan melalui tautan berikut untuk dukungan digital envelope.",
    confirm_url: "https://wa.me/",
    qr_src: "/gallery/qris.svg",
    qr_alt: "QRIS untuk dukungan digital envelope",
    qr_note: "Scan kode QRIS ini untuk berbagi hadiah secara digital. Terima kasih atas perhatian Anda.",
};

/// Messages shown before any guest has written, newest-first.
pub const SEED_WISHES: [(&str, &str); 3] = [
    ("Rizky & Entin", "Terima kasih atas doa dan kasih sayang yang senantiasa mengiringi kami."),
    ("Rizky & Entin", "Semoga hari bahagia ini menjadi awal perjalanan keluarga yang penuh berkah."),
    ("Rizky & Entin", "Mohon doa agar rumah tangga kami menjadi keluarga sakinah, mawaddah, warahmah."),
];

pub const GALLERY: [GalleryImage; 15] = [
    GalleryImage {
        src: "/gallery/main-bridge.svg",
        alt: "Pasangan berjalan di atas jembatan kota saat senja",
        title: "Senja Di Kota",
        description: "Langkah ringan di jembatan kota menjadi simbol perjalanan baru yang dimulai bersama.",
    },
    GalleryImage {
        src: "/gallery/cafe-moment.svg",
        alt: "Pasangan duduk di kafe minimalis sambil tertawa",
        title: "Coffee Date",
        description: "Momen sederhana di kafe favorit yang selalu membuat kami kembali jatuh cinta.",
    },
    GalleryImage {
        src: "/gallery/atrium-light.svg",
        alt: "Interior atrium dengan sorot cahaya hangat",
        title: "Atrium Light",
        description: "Pendar cahaya lembut yang menjadi latar prosesi pemberkatan keluarga inti.",
    },
    GalleryImage {
        src: "/gallery/city-skyline.svg",
        alt: "Silhouette kota dengan langit oranye",
        title: "City Skyline",
        description: "Langit kota Jakarta yang menjadi saksi perjalanan karier dan doa kami.",
    },
    GalleryImage {
        src: "/gallery/family-toast.svg",
        alt: "Keluarga melakukan toast bersama",
        title: "Family Toast",
        description: "Momen keluarga inti merayakan kebersamaan dan restu hangat untuk kami.",
    },
    GalleryImage {
        src: "/gallery/ring-details.svg",
        alt: "Foto detail cincin pernikahan",
        title: "Ring Details",
        description: "Cincin sederhana sebagai pengingat janji untuk saling menjaga seumur hidup.",
    },
    GalleryImage {
        src: "/gallery/photo-07.svg",
        alt: "Pasangan berdiri di balkon gedung tinggi",
        title: "City Balcony",
        description: "Menghirup udara sore sambil memandang jalan cerita yang sudah kami tempuh.",
    },
    GalleryImage {
        src: "/gallery/photo-08.svg",
        alt: "Pasangan berbincang di studio foto minimalis",
        title: "Studio Talk",
        description: "Obrolan ringan yang selalu membuat kami tersenyum dan merasa pulang.",
    },
    GalleryImage {
        src: "/gallery/photo-09.svg",
        alt: "Detail dekorasi meja resepsi",
        title: "Table Detail",
        description: "Dekorasi resepsi dengan nuansa monokrom yang hangat dan elegan.",
    },
    GalleryImage {
        src: "/gallery/photo-10.svg",
        alt: "Pasangan berjalan di lorong hotel",
        title: "Quiet Hallway",
        description: "Lorong sunyi sebelum memasuki ballroom tempat kami merayakan hari bahagia.",
    },
    GalleryImage {
        src: "/gallery/photo-11.svg",
        alt: "Detail buket bunga tangan",
        title: "Bouquet",
        description: "Buket bunga pilihan dengan nuansa putih dan hijau yang sederhana.",
    },
    GalleryImage {
        src: "/gallery/photo-12.svg",
        alt: "Pasangan berdiri di depan jendela besar",
        title: "Light Filled",
        description: "Pagi yang cerah sebelum kami mengucap janji suci dengan penuh rasa syukur.",
    },
    GalleryImage {
        src: "/gallery/photo-13.svg",
        alt: "Pasangan duduk di tangga kayu",
        title: "Stair Pause",
        description: "Jeda tenang di antara kesibukan persiapan untuk kembali menenangkan hati.",
    },
    GalleryImage {
        src: "/gallery/photo-14.svg",
        alt: "Pasangan tersenyum sambil berdiri di ruang tamu",
        title: "Home Stories",
        description: "Ruang tempat kami banyak berbagi cerita dan menyusun rencana masa depan.",
    },
    GalleryImage {
        src: "/gallery/photo-15.svg",
        alt: "Backdrop minimalis dengan panel monokrom",
        title: "Backdrop",
        description: "Backdrop sederhana yang menjadi latar foto keluarga inti.",
    },
];
