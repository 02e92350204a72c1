//! Static province/district hierarchy

use crate::region::{District, Province};

/// Provinces and their districts, in search order.
pub static PROVINCES: &[Province] = &[
    Province::new("กรุงเทพมหานคร", "Bangkok", BANGKOK_DISTRICTS),
    Province::new("สมุทรปราการ", "Samut Prakan", SAMUT_PRAKAN_DISTRICTS),
    Province::new("นนทบุรี", "Nonthaburi", NONTHABURI_DISTRICTS),
    Province::new("เชียงใหม่", "Chiang Mai", CHIANG_MAI_DISTRICTS),
    Province::new("ขอนแก่น", "Khon Kaen", KHON_KAEN_DISTRICTS),
];

const BANGKOK_DISTRICTS: &[District] = &[
    District::new("พระนคร", "Phra Nakhon"),
    District::new("ดุสิต", "Dusit"),
    District::new("หนองจอก", "Nong Chok"),
    District::new("บางรัก", "Bang Rak"),
    District::new("บางเขน", "Bang Khen"),
    District::new("บางกะปิ", "Bang Kapi"),
    District::new("ปทุมวัน", "Pathum Wan"),
    District::new("ป้อมปราบศัตรูพ่าย", "Pom Prap Sattru Phai"),
    District::new("พระโขนง", "Phra Khanong"),
    District::new("มีนบุรี", "Min Buri"),
    District::new("ลาดกระบัง", "Lat Krabang"),
    District::new("ยานนาวา", "Yan Nawa"),
    District::new("สัมพันธวงศ์", "Samphanthawong"),
    District::new("พญาไท", "Phaya Thai"),
    District::new("ธนบุรี", "Thon Buri"),
    District::new("บางกอกใหญ่", "Bangkok Yai"),
    District::new("ห้วยขวาง", "Huai Khwang"),
    District::new("คลองสาน", "Khlong San"),
    District::new("ตลิ่งชัน", "Taling Chan"),
    District::new("บางกอกน้อย", "Bangkok Noi"),
    District::new("บางขุนเทียน", "Bang Khun Thian"),
    District::new("ภาษีเจริญ", "Phasi Charoen"),
    District::new("หนองแขม", "Nong Khaem"),
    District::new("ราษฎร์บูรณะ", "Rat Burana"),
    District::new("บางพลัด", "Bang Phlat"),
    District::new("ดินแดง", "Din Daeng"),
    District::new("บึงกุ่ม", "Bung Kum"),
    District::new("สาทร", "Sathon"),
    District::new("บางซื่อ", "Bang Sue"),
    District::new("จตุจักร", "Chatuchak"),
    District::new("บางคอแหลม", "Bang Kho Laem"),
    District::new("ประเวศ", "Prawet"),
    District::new("คลองเตย", "Khlong Toei"),
    District::new("สวนหลวง", "Suan Luang"),
    District::new("จอมทอง", "Chom Thong"),
    District::new("ดอนเมือง", "Don Mueang"),
    District::new("ราชเทวี", "Ratchathewi"),
    District::new("ลาดพร้าว", "Lat Phrao"),
    District::new("วัฒนา", "Watthana"),
    District::new("บางแค", "Bang Khae"),
    District::new("หลักสี่", "Lak Si"),
    District::new("สายไหม", "Sai Mai"),
    District::new("คันนายาว", "Khan Na Yao"),
    District::new("สะพานสูง", "Saphan Sung"),
    District::new("วังทองหลาง", "Wang Thonglang"),
    District::new("คลองสามวา", "Khlong Sam Wa"),
    District::new("บางนา", "Bang Na"),
    District::new("ทวีวัฒนา", "Thawi Watthana"),
    District::new("ทุ่งครุ", "Thung Khru"),
    District::new("บางบอน", "Bang Bon"),
];

const SAMUT_PRAKAN_DISTRICTS: &[District] = &[
    District::new("เมืองสมุทรปราการ", "Mueang Samut Prakan"),
    District::new("บางบ่อ", "Bang Bo"),
    District::new("บางพลี", "Bang Phli"),
    District::new("พระประแดง", "Phra Pradaeng"),
    District::new("พระสมุทรเจดีย์", "Phra Samut Chedi"),
    District::new("บางเสาธง", "Bang Sao Thong"),
];

const NONTHABURI_DISTRICTS: &[District] = &[
    District::new("เมืองนนทบุรี", "Mueang Nonthaburi"),
    District::new("บางบัวทอง", "Bang Bua Thong"),
    District::new("ปากเกร็ด", "Pak Kret"),
    District::new("บางกรวย", "Bang Kruai"),
    District::new("บางใหญ่", "Bang Yai"),
    District::new("ไทรน้อย", "Sai Noi"),
];

const CHIANG_MAI_DISTRICTS: &[District] = &[
    District::new("เมืองเชียงใหม่", "Mueang Chiang Mai"),
    District::new("จอมทอง", "Chom Thong"),
    District::new("แม่แจ่ม", "Mae Chaem"),
    District::new("เชียงดาว", "Chiang Dao"),
    District::new("ดอยสะเก็ด", "Doi Saket"),
    District::new("แม่แตง", "Mae Taeng"),
    District::new("แม่ริม", "Mae Rim"),
    District::new("สะเมิง", "Samoeng"),
    District::new("ฝาง", "Fang"),
    District::new("แม่อาย", "Mae Ai"),
    District::new("พร้าว", "Phrao"),
    District::new("สันป่าตอง", "San Pa Tong"),
    District::new("สันกำแพง", "San Kamphaeng"),
    District::new("สันทราย", "San Sai"),
    District::new("หางดง", "Hang Dong"),
    District::new("ฮอด", "Hot"),
    District::new("ดอยเต่า", "Doi Tao"),
    District::new("อมก๋อย", "Omkoi"),
    District::new("สารภี", "Saraphi"),
    District::new("เวียงแหง", "Wiang Haeng"),
    District::new("ไชยปราการ", "Chai Prakan"),
    District::new("แม่วาง", "Mae Wang"),
    District::new("แม่ออน", "Mae On"),
    District::new("ดอยหล่อ", "Doi Lo"),
    District::new("กัลยาณิวัฒนา", "Galayani Vadhana"),
];

const KHON_KAEN_DISTRICTS: &[District] = &[
    District::new("เมืองขอนแก่น", "Mueang Khon Kaen"),
    District::new("บ้านฝาง", "Ban Fang"),
    District::new("พระยืน", "Phra Yuen"),
    District::new("หนองเรือ", "Nong Ruea"),
    District::new("ชุมแพ", "Chum Phae"),
    District::new("สีชมพู", "Si Chomphu"),
    District::new("น้ำพอง", "Nam Phong"),
    District::new("อุบลรัตน์", "Ubolratana"),
    District::new("กระนวน", "Kranuan"),
    District::new("บ้านไผ่", "Ban Phai"),
    District::new("เปือยน้อย", "Pueai Noi"),
    District::new("พล", "Phon"),
    District::new("แวงใหญ่", "Waeng Yai"),
    District::new("แวงน้อย", "Waeng Noi"),
    District::new("หนองสองห้อง", "Nong Song Hong"),
    District::new("ภูเวียง", "Phu Wiang"),
    District::new("มัญจาคีรี", "Mancha Khiri"),
    District::new("ชนบท", "Chonnabot"),
    District::new("เขาสวนกวาง", "Khao Suan Kwang"),
    District::new("ภูผาม่าน", "Phu Pha Man"),
    District::new("ซำสูง", "Sam Sung"),
    District::new("โคกโพธิ์ไชย", "Khok Pho Chai"),
    District::new("หนองนาคำ", "Nong Na Kham"),
    District::new("บ้านแฮด", "Ban Haet"),
    District::new("โนนศิลา", "Non Sila"),
    District::new("เวียงเก่า", "Wiang Kao"),
];
