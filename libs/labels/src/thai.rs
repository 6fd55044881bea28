use crate::Catalogue;

pub(crate) static CATALOGUE: Catalogue = Catalogue {
    impact: [
        // reputation
        [
            "น้อย/อย่างจำกัด โดยพิจารณาจาก 1. ส่งผลกระทบเฉพาะภาพลักษณ์หน่วยงาน ใช่หรือไม่ 2. ส่งผลกระทบต่อการรับรู้บทบาทหน้าที่ของหน่วยงาน ใช่หรือไม่ 3. ส่งผลกระทบต่อภาพลักษณ์ของระบบการให้บริการ ใช่หรือไม่",
            "อย่างร้ายแรง โดยพิจารณาจาก 1. ส่งผลกระทบต่อภาพลักษณ์ของระบบการให้บริการ ใช่หรือไม่ 2. ส่งผลความเชื่อมั่นของผู้ใช้บริการ ใช่หรือไม่ 3. สามารถฟ้องร้องทางคดีแพ่ง ใช่หรือไม่",
            "อย่างร้ายแรงมาก โดยพิจารณาจาก 1. ส่งผลกระทบต่อภาพลักษณ์ขื่อเสียงของรัฐในระดับประเทศ ใช่หรือไม่ 2. สามารถฟ้องร้องทางคดีแพ่ง ใช่หรือไม่ 3. สามารถฟ้องร้องทางคดีอาญา ใช่หรือไม่",
        ],
        // usage
        [
            "รายบริการ/การดำเนินงานขององค์กร โดยพิจารณาจาก 1. ส่งผลกระทบต่อการทำงานภายในหน่วยงาน ใช่หรือไม่ 2. ส่งผลกระทบต่อประสิทธิภาพการทำงานของผู้ปฏิบัติงานของหน่วยงานลดลง ใช่หรือไม่ 3. ส่งผลการใช้งานของจำนวนผู้ใช้งานในวงแคบ ใช่หรือไม่",
            "ราย Domain/การดำเนินของกระทรวง/ระหว่าง องค์กร/จังหวัด โดยพิจารณาจาก 1. ส่งผลให้เกิดอุปสรรคต่อการทำงานภายในหน่วยงาน และหน่วยงานคู่สัญญา 2. ส่งผลต่อประสิทธิภาพการให้บริการของระบบ 3. บางบริการมีความไม่สะดวก หรือล่าช้า เสียเวลา แต่ยังไม่สูญเสียข้อมูล ใช่หรือไม่ 4. ส่งผลกระทบต่อผู้ใช้บริการบางส่วน ใช่หรือไม่",
            "Cross Domains, Sectors, Region/การดำเนินงานตามแผนบูรณาการ/กลุ่มจังหวัด โดยพิจารณาจาก 1. ส่งผลกระทบต่อการทำงานภายในหน่วยงานเครือข่ายมากกว่า 2 หน่วยงาน ใช่หรือไม่ 2. ส่งผลกระทบต่อผู้มาใช้บริการทุกคน และกระทบวงกว้างในระดับประเทศ ใช่หรือไม่ 3. ระบบล่มหรือใช้งานไม่ได้ ทำให้เกิดความเสียหายของผู้ใช้บริการ ใช่หรือไม่ 4. ข้อมูลในระบบสูญหายและไม่สามารถกู้คืนมา ใช่หรือไม่",
        ],
        // financial
        [
            "มูลค่าไม่เกิน 5 ล้าน/ Small project โดยพิจารณาจาก มูลค่าความเสียหายของการให้บริการหรือโครงการ เช่น ค่าดำเนินการ เช่น ค่าปรับ ค่าเยียวยา ค่าเสียหาย โดยมีมูลค่าไม่เกิน 5 ล้าน ใช่หรือไม่ ทั้งนี้ การพิจารณาเป็นตัวเงินและความสูญเสียหายของ Asset อาจเป็นเรื่องบทลงโทษทางกฎหมาย มูลค่าความเสียหาย ค่าดำเนินการต่างๆ",
            "ตั้งแต่ 5 ล้าน แต่ไม่ถึง 100 ล้าน/ Medium project โดยพิจารณาจาก มูลค่าความเสียหายของการให้บริการหรือโครงการ เช่น ค่าดำเนินการ เช่น ค่าปรับ ค่าเยียวยา ค่าเสียหาย โดยมีมูลค่า ตั้งแต่ 5 ล้าน แต่ไม่ถึง 50 ล้านบาท ใช่หรือไม่ ทั้งนี้ การพิจารณาเป็นตัวเงินและความสูญเสียหายของ Asset อาจเป็นเรื่องบทลงโทษทางกฎหมาย มูลค่าความเสียหาย ค่าดำเนินการต่างๆ",
            "ตั้งแต่ 100 ล้านบาท ขึ้นไป / Large Project โดยพิจารณาจาก มูลค่าความเสียหายของการให้บริการหรือโครงการ เช่น ค่าดำเนินการ เช่น ค่าปรับ ค่าเยียวยา ค่าเสียหาย โดยมีมูลค่า ตั้งแต่ 100 ล้านบาท ใช่หรือไม่ ทั้งนี้ การพิจารณาเป็นตัวเงินและความสูญเสียหายของ Asset อาจเป็นเรื่องบทลงโทษทางกฎหมาย มูลค่าความเสียหาย ค่าดำเนินการต่างๆ",
        ],
        // legal
        [
            "ละเว้นการปฏิบัติตามระเบียบข้อบังคับขององค์กร ซึ่งเกิดผลกระทบน้อย โดยพิจารณาจาก 1. ไม่ปฏิบัติตามกฎระเบียบระดับองค์กร ใช่หรือไม่ 2. ส่งผลให้หน่วยงานได้รับบทลงโทษของหน่วยงาน ใช่หรือไม่",
            "ละเว้นการปฏิบัติตามระเบียบข้อบังคับและกฎกระทรวง ซึ่งเกิดผลกระทบที่มีนัยสำคัญ และไม่เป็นไปตามเป้าของ ก.พ.ร. โดยพิจารณาจาก 1. ไม่ปฏิบัติตามกฎระเบียบระดับกระทรวง เช่น กฎกระทรวง ใช่หรือไม่ 2. ส่งผลให้หน่วยงานได้รับบทลงโทษทางอาญาและทางแพ่ง หรือ โทษทางปกครอง ใช่หรือไม่",
            "ละเว้นการปฏิบัติตามกฎหมาย มติ ครม. หรือระเบียบข้อบังคับ ซึ่งเกิดผลกระทบที่มีนัยสำคัญ และไม่เป็นไปตามเป้าของแผนบูรณาการ/กลุ่มจังหวัด โดยพิจารณาจาก 1. ไม่ปฏิบัติตามกฎหมายอย่างชัดเจน หรือไม่ปฏิบัติตามมติ ครม. รัฐบาล และไม่เป็นไปตามเป้าหมายของแผนบูรณการ ใช่หรือไม่ 2. ไม่ปฏิบัติตามกฎหมายส่งผลให้หน่วยงานได้รับบทลงโทษทางอาญาและทางแพ่ง หรือ โทษทางปกครอง ใช่หรือไม่",
        ],
    ],
    sub_definition: [
        "การรักษาข้อจำกัดในการได้รับอนุญาตให้เข้าถึงได้และเปิดเผยเฉพาะผู้มีสิทธิ์ รวมทั้งวิธีการคุ้มครองความเป็นส่วนตัว (privacy) และกรรมสิทธิ์ (proprietary) ของข้อมูลข่าวสาร",
        "การปกป้องจากการดัดแปลงหรือทำลายข้อมูลที่ไม่เหมาะสม และรวมถึงการรับรองว่าข้อมูลจะไม่ถูกปฏิเสธ (non-repudiation) และเป็นข้อมูลที่ถูกต้องเป็นความจริง (authenticity)",
        "การสร้างความมั่นใจในการเข้าถึงและการใช้ข้อมูลอย่างทันท่วงที/เป็นปัจจุบันและเชื่อถือได้",
    ],
    sub_impact: [
        // confidentiality
        [
            "Low: การเปิดเผยข้อมูลโดยไม่ได้รับอนุญาตอาจส่งผลกระทบน้อย/อย่างจำกัด (limited) และเกิดผลประโยชน์แห่งชาติสำคัญน้อย (Less Important or Secondary National Interests)",
            "Medium: การเปิดเผยข้อมูลโดยไม่ได้รับอนุญาตอาจส่งผลกระทบอย่างร้ายแรง (serious) และเกิดผลประโยชน์แห่งชาติที่สำคัญ (Important National Interests)",
            "High: การเปิดเผยข้อมูลโดยไม่ได้รับอนุญาตอาจส่งผลกระทบอย่างร้ายแรงมาก (severe or catastrophic) และเกิดผลประโยชน์แห่งชาติสำคัญยิ่ง (Extremely Important National Interests)",
        ],
        // integrity
        [
            "Low: การแก้ไขหรือทำลายข้อมูลโดยไม่ได้รับอนุญาตอาจส่งผลกระทบน้อย/อย่างจำกัด (limited) และเกิดผลประโยชน์แห่งชาติสำคัญน้อย (Less Important or Secondary National Interests)",
            "Medium: การแก้ไขหรือทำลายข้อมูลโดยไม่ได้รับอนุญาตอาจส่งผลกระทบอย่างร้ายแรง (serious) และเกิดผลประโยชน์แห่งชาติที่สำคัญ (Important National Interests)",
            "High: การแก้ไขหรือทำลายข้อมูลโดยไม่ได้รับอนุญาตอาจส่งผลกระทบอย่างร้ายแรงมาก (severe or catastrophic) และเกิดผลประโยชน์แห่งชาติสำคัญยิ่ง (Extremely Important National Interests)",
        ],
        // availability
        [
            "Low: การหยุดชะงักของการเข้าถึงหรือการใช้ข้อมูลข่าวสารหรือระบบสารสนเทศอาจส่งผลกระทบน้อย/อย่างจำกัด (limited) และเกิดผลประโยชน์แห่งชาติสำคัญน้อย (Less Important or Secondary National Interests)",
            "Medium: การหยุดชะงักของการเข้าถึงหรือการใช้ข้อมูลข่าวสารหรือระบบสารสนเทศอาจส่งผลกระทบอย่างร้ายแรง (serious) และเกิดผลประโยชน์แห่งชาติที่สำคัญ (Important National Interests)",
            "High: การหยุดชะงักของการเข้าถึงหรือการใช้ข้อมูลข่าวสารหรือระบบสารสนเทศอาจส่งผลกระทบอย่างร้ายแรงมาก (severe or catastrophic) และเกิดผลประโยชน์แห่งชาติสำคัญยิ่ง (Extremely Important National Interests)",
        ],
    ],
    likelihood: [
        "Level 1: แทบจะไม่เกิด (เช่น อย่างมากปีละ 1 ครั้ง)",
        "Level 2: โอกาสเกิดน้อย (เช่น ไม่เกินปีละ 2 ครั้ง)",
        "Level 3: ปานกลาง (เช่น ปีละ 3-5 ครั้ง)",
        "Level 4: ค่อนข้างบ่อย (เช่น ปีละ 6-10 ครั้ง)",
        "Level 5: เกิดเป็นประจำ (เช่น อย่างน้อยเดือนละครั้ง)",
    ],
    impact_level: ["Low", "Medium", "High"],
    classification: ["เปิดเผย", "ใช้ภายใน", "ลับ", "ลับมาก", "ลับที่สุด"],
    impact_heading: "คำนิยามระดับ impact",
};
