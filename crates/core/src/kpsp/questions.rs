//! KPSP question bank, keyed by screening bracket (age in months).
//!
//! Ten-item question sets per the Kuesioner Pra Skrining Perkembangan visit
//! schedule: every 3 months up to 24 months, then every 6 months up to 72.

const MONTHS_3: [&str; 10] = [
    "Apakah anak dapat mengangkat kepalanya 45 derajat saat tengkurap?",
    "Apakah anak tersenyum saat diajak bicara atau tersenyum sendiri?",
    "Apakah anak mengeluarkan suara-suara (mengoceh)?",
    "Apakah anak dapat menatap dan mengikuti wajah ibu/pengasuh?",
    "Apakah anak berusaha meraih benda atau mainan yang ditunjukkan?",
    "Apakah anak menggerakkan kedua lengan dan kakinya sama mudahnya saat telentang?",
    "Apakah anak terkejut atau bereaksi terhadap suara keras?",
    "Apakah anak dapat menahan kepalanya tetap tegak beberapa saat ketika digendong?",
    "Apakah anak mengikuti benda bergerak dengan matanya dari satu sisi ke sisi lain?",
    "Apakah anak membalas senyum ketika Anda tersenyum kepadanya?",
];

const MONTHS_6: [&str; 10] = [
    "Apakah anak dapat duduk dengan bantuan (bersandar)?",
    "Apakah anak dapat memindahkan mainan dari tangan satu ke tangan lain?",
    "Apakah anak mengeluarkan suara vokal seperti 'a-u-o'?",
    "Apakah anak tertawa keras saat bermain atau diajak bercanda?",
    "Apakah anak mengenal orang asing (tampak malu atau marah)?",
    "Apakah anak dapat berbalik dari telentang ke tengkurap sendiri?",
    "Apakah anak meraih mainan yang diletakkan dalam jangkauannya?",
    "Apakah anak menoleh ke arah sumber suara?",
    "Apakah anak memasukkan benda atau mainan ke mulutnya?",
    "Apakah anak dapat menahan kepala tetap tegak dan stabil saat didudukkan?",
];

const MONTHS_9: [&str; 10] = [
    "Apakah anak dapat duduk sendiri tanpa bantuan minimal 1 menit?",
    "Apakah anak dapat merangkak maju (bukan mundur)?",
    "Apakah anak mengucapkan 'mama' atau 'papa' (meski belum tepat)?",
    "Apakah anak dapat meraih benda kecil dengan jempol dan telunjuk?",
    "Apakah anak dapat menirukan gerakan tepuk tangan?",
    "Apakah anak dapat berdiri dengan berpegangan pada perabot?",
    "Apakah anak mencari mainan yang disembunyikan di depan matanya?",
    "Apakah anak makan kue atau biskuit yang dipegangnya sendiri?",
    "Apakah anak menoleh saat namanya dipanggil?",
    "Apakah anak dapat memegang dua benda, satu di tiap tangan, secara bersamaan?",
];

const MONTHS_12: [&str; 10] = [
    "Apakah anak dapat berdiri sendiri minimal 5 detik tanpa berpegangan?",
    "Apakah anak dapat berjalan berpegangan pada perabot?",
    "Apakah anak dapat mengucapkan 2-3 kata yang bermakna?",
    "Apakah anak dapat minum dari cangkir sendiri?",
    "Apakah anak dapat menunjuk benda yang diinginkannya?",
    "Apakah anak dapat mengambil benda kecil seperti kacang dengan menjumput?",
    "Apakah anak melambaikan tangan saat berpamitan (dadah)?",
    "Apakah anak menirukan kata-kata sederhana yang Anda ucapkan?",
    "Apakah anak memberikan mainan kepada Anda bila diminta?",
    "Apakah anak bertepuk tangan atau bermain ciluk-ba tanpa dibantu?",
];

const MONTHS_15: [&str; 10] = [
    "Apakah anak dapat berjalan sendiri dengan stabil minimal 5 langkah?",
    "Apakah anak dapat minum dari gelas tanpa tumpah?",
    "Apakah anak dapat mengucapkan 4-6 kata dengan jelas?",
    "Apakah anak dapat menumpuk 2 kubus dengan stabil?",
    "Apakah anak dapat membantu melepas sepatunya sendiri?",
    "Apakah anak dapat berjalan mundur beberapa langkah tanpa jatuh?",
    "Apakah anak menunjuk benda yang diinginkannya dengan jari telunjuk?",
    "Apakah anak memungut mainan dari lantai tanpa berpegangan lalu berdiri kembali?",
    "Apakah anak memasukkan kubus ke dalam cangkir bila diminta?",
    "Apakah anak memanggil 'mama' atau 'papa' dengan tepat kepada orangnya?",
];

const MONTHS_18: [&str; 10] = [
    "Apakah anak dapat berlari minimal 5 langkah berturut-turut?",
    "Apakah anak dapat naik tangga dengan bantuan pegangan?",
    "Apakah anak dapat mengucapkan 10-15 kata yang berbeda?",
    "Apakah anak dapat makan sendiri dengan sendok?",
    "Apakah anak dapat menunjuk minimal 2 bagian tubuhnya?",
    "Apakah anak dapat menumpuk 3 kubus tanpa terjatuh?",
    "Apakah anak mencoret-coret kertas dengan pensil atau krayon?",
    "Apakah anak dapat melepas sepatu atau kaos kakinya sendiri?",
    "Apakah anak menunjuk gambar yang disebutkan namanya dalam buku?",
    "Apakah anak berjalan naik tangga sambil berpegangan pada tangan Anda?",
];

const MONTHS_21: [&str; 10] = [
    "Apakah anak dapat menendang bola ke depan tanpa jatuh?",
    "Apakah anak dapat naik tangga dengan 1 kaki bergantian?",
    "Apakah anak dapat mengucapkan kalimat 2-3 kata?",
    "Apakah anak dapat membalik halaman buku satu per satu?",
    "Apakah anak dapat mengikuti perintah sederhana 2 tahap?",
    "Apakah anak dapat menumpuk 4 kubus atau lebih?",
    "Apakah anak menendang bola kecil ke arah Anda?",
    "Apakah anak menyebutkan nama minimal 3 benda yang ditunjuk?",
    "Apakah anak membantu memakai bajunya sendiri (memasukkan lengan)?",
    "Apakah anak berjalan cepat atau berlari tanpa sering jatuh?",
];

const MONTHS_24: [&str; 10] = [
    "Apakah anak dapat melompat dengan 2 kaki bersamaan?",
    "Apakah anak dapat naik-turun tangga tanpa pegangan?",
    "Apakah anak dapat membuat kalimat 3-4 kata yang runtut?",
    "Apakah anak dapat menggambar garis vertikal setelah dicontohkan?",
    "Apakah anak dapat mengikuti perintah kompleks 3 tahap?",
    "Apakah anak dapat menumpuk 6 kubus atau lebih?",
    "Apakah anak menyebutkan namanya sendiri bila ditanya?",
    "Apakah anak meniru pekerjaan rumah tangga seperti menyapu?",
    "Apakah anak melepas pakaiannya sendiri tanpa dibantu?",
    "Apakah anak menunjuk minimal 4 bagian tubuh bila diminta?",
];

const MONTHS_30: [&str; 10] = [
    "Apakah anak dapat melompat dengan kedua kaki diangkat bersamaan?",
    "Apakah anak dapat menumpuk 8 kubus tanpa terjatuh?",
    "Apakah anak menggunakan kalimat 2-3 kata saat meminta sesuatu?",
    "Apakah anak dapat menunjuk 7 bagian tubuh bila diminta?",
    "Apakah anak makan sendiri tanpa banyak tumpah?",
    "Apakah anak membantu membereskan mainannya bila diminta?",
    "Apakah anak dapat melempar bola kecil melewati atas kepala?",
    "Apakah anak menirukan garis vertikal yang Anda gambar?",
    "Apakah anak menyebutkan nama satu warna dengan benar?",
    "Apakah anak mencuci dan mengeringkan tangannya sendiri?",
];

const MONTHS_36: [&str; 10] = [
    "Apakah anak dapat berdiri dengan satu kaki selama 1 detik tanpa berpegangan?",
    "Apakah anak dapat mengayuh sepeda roda tiga sejauh 3 meter?",
    "Apakah anak menggunakan kalimat lengkap 3-4 kata?",
    "Apakah sebagian besar ucapan anak dapat dimengerti orang lain?",
    "Apakah anak dapat menirukan lingkaran yang Anda gambar?",
    "Apakah anak mengenakan sepatunya sendiri meski kadang terbalik?",
    "Apakah anak menyebutkan nama temannya saat bermain?",
    "Apakah anak dapat menyebutkan kegunaan dua benda (misalnya cangkir dan sendok)?",
    "Apakah anak bermain bersama anak lain secara bergiliran?",
    "Apakah anak dapat naik tangga dengan kaki bergantian tanpa berpegangan?",
];

const MONTHS_42: [&str; 10] = [
    "Apakah anak dapat berdiri dengan satu kaki selama 2 detik?",
    "Apakah anak dapat melompati selembar kertas di lantai dengan kedua kaki?",
    "Apakah anak menyebutkan nama lengkapnya bila ditanya?",
    "Apakah anak menjawab dengan benar pertanyaan 'apa yang kamu lakukan bila lapar?'",
    "Apakah anak dapat menirukan tanda tambah (+) yang Anda gambar?",
    "Apakah anak memakai kaosnya sendiri tanpa dibantu?",
    "Apakah anak menyebutkan dua warna dengan benar?",
    "Apakah anak bermain pura-pura (misalnya masak-masakan atau menyuapi boneka)?",
    "Apakah anak dapat menumpuk 8 kubus atau lebih tanpa terjatuh?",
    "Apakah anak mengikuti perintah yang terdiri dari 3 tahap?",
];

const MONTHS_48: [&str; 10] = [
    "Apakah anak dapat berdiri dengan satu kaki selama 4 detik?",
    "Apakah anak dapat melompat dengan satu kaki minimal 1 kali?",
    "Apakah anak menyebutkan nama dan kegunaan 3 benda dengan benar?",
    "Apakah anak dapat menggambar orang dengan minimal 3 bagian tubuh?",
    "Apakah anak menghitung benda sampai 4 dengan benar?",
    "Apakah anak mengancingkan bajunya sendiri?",
    "Apakah anak bercerita singkat tentang kegiatannya hari itu?",
    "Apakah anak menyebutkan empat warna dengan benar?",
    "Apakah anak bermain mengikuti aturan sederhana (misalnya petak umpet)?",
    "Apakah anak buang air kecil di toilet tanpa mengompol di siang hari?",
];

const MONTHS_54: [&str; 10] = [
    "Apakah anak dapat berdiri dengan satu kaki selama 6 detik?",
    "Apakah anak dapat melompat dengan satu kaki 2-3 kali berturut-turut?",
    "Apakah anak dapat menggambar orang dengan 6 bagian tubuh?",
    "Apakah anak dapat menirukan persegi yang Anda gambar?",
    "Apakah anak menjawab pertanyaan 'apa yang kamu lakukan bila kedinginan?'",
    "Apakah anak memakai pakaiannya sendiri secara lengkap tanpa dibantu?",
    "Apakah anak menyebutkan lawan kata sederhana (besar-kecil, panas-dingin)?",
    "Apakah anak menghitung benda sampai 10 dengan benar?",
    "Apakah anak mengerti kata di atas, di bawah, dan di depan?",
    "Apakah anak menggosok giginya sendiri tanpa dibantu?",
];

const MONTHS_60: [&str; 10] = [
    "Apakah anak dapat berdiri dengan satu kaki selama 8 detik?",
    "Apakah anak dapat menangkap bola kecil dengan kedua tangan?",
    "Apakah anak dapat menggambar orang dengan 6 bagian tubuh atau lebih?",
    "Apakah anak menyebutkan arti kata sederhana seperti 'pisang' atau 'kursi'?",
    "Apakah anak menceritakan kembali isi cerita pendek yang baru didengarnya?",
    "Apakah anak berpakaian lengkap sendiri termasuk kancing dan risleting?",
    "Apakah anak menyebutkan alamat rumah atau nama kampungnya?",
    "Apakah anak menirukan segitiga yang Anda gambar?",
    "Apakah anak mengerti urutan kejadian (sebelum-sesudah) dalam cerita?",
    "Apakah anak bermain dengan teman sebaya mengikuti aturan permainan?",
];

const MONTHS_66: [&str; 10] = [
    "Apakah anak dapat melompat dengan satu kaki sejauh 2 meter?",
    "Apakah anak dapat berjalan mundur mengikuti garis lurus?",
    "Apakah anak menggambar orang dengan kepala, badan, lengan, dan kaki?",
    "Apakah anak menulis beberapa huruf atau angka yang dikenalnya?",
    "Apakah anak menyebutkan hari ini hari apa?",
    "Apakah anak menyebutkan angka 1 sampai 20 secara berurutan?",
    "Apakah anak mengikat tali sepatunya atau berusaha melakukannya sendiri?",
    "Apakah anak menjawab pertanyaan 'terbuat dari apakah sendok?'",
    "Apakah anak bermain peran bersama teman dengan pembagian tugas?",
    "Apakah anak mandi sendiri dengan pengawasan ringan?",
];

const MONTHS_72: [&str; 10] = [
    "Apakah anak dapat berdiri dengan satu kaki selama 10 detik atau lebih?",
    "Apakah anak dapat menangkap bola kecil yang dilempar dari jarak 2 meter?",
    "Apakah anak menyalin kata atau namanya sendiri di kertas?",
    "Apakah anak menyebutkan lawan kata dari tiga kata yang Anda ucapkan?",
    "Apakah anak menjelaskan persamaan dua benda (misalnya kucing dan ayam sama-sama hewan)?",
    "Apakah anak menyebutkan nama-nama hari dalam seminggu?",
    "Apakah anak menghitung benda sampai 20 dengan benar?",
    "Apakah anak memakai dan melepas pakaian sepenuhnya sendiri, termasuk sepatu?",
    "Apakah anak mengikuti permainan berkelompok dengan aturan yang disepakati?",
    "Apakah anak menyelesaikan tugas sederhana sampai selesai tanpa terus diingatkan?",
];

/// The ordered question list for a bracket, or `None` if the bracket is not
/// part of the KPSP schedule.
pub(super) fn for_bracket(bracket: u32) -> Option<&'static [&'static str]> {
    match bracket {
        3 => Some(&MONTHS_3),
        6 => Some(&MONTHS_6),
        9 => Some(&MONTHS_9),
        12 => Some(&MONTHS_12),
        15 => Some(&MONTHS_15),
        18 => Some(&MONTHS_18),
        21 => Some(&MONTHS_21),
        24 => Some(&MONTHS_24),
        30 => Some(&MONTHS_30),
        36 => Some(&MONTHS_36),
        42 => Some(&MONTHS_42),
        48 => Some(&MONTHS_48),
        54 => Some(&MONTHS_54),
        60 => Some(&MONTHS_60),
        66 => Some(&MONTHS_66),
        72 => Some(&MONTHS_72),
        _ => None,
    }
}
