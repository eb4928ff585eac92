//! # Help Text
//!
//! The usage guide shown by the `!가이드` command.

pub const GUIDE: &str = concat!(
    "🐾 댕동이 사용 가이드 🐾\n\n",
    "1️⃣ 댕동이와 대화하기\n",
    "   사용법: !메시지\n",
    "   설명: '!'로 시작하는 메시지를 보내면 댕동이가 대답해요.\n\n",
    "2️⃣ 채팅 통계 확인하기\n",
    "   명령어: !고인물 또는 !ㄱㅇㅁ\n",
    "   설명: 이 방의 채팅 통계를 확인할 수 있어요.\n\n",
    "3️⃣ 성격 분석하기\n",
    "   명령어: !성격분석 [사용자ID]\n",
    "   설명: 지정한 사용자의 성격을 분석해요.\n\n",
    "4️⃣ 출석체크하기\n",
    "   명령어: ㅊㅊ 또는 !ㅊㅊ\n",
    "   설명: 오늘의 출석체크를 할 수 있어요.\n\n",
    "5️⃣ 오늘의 뉴스 보기\n",
    "   명령어: !뉴스 또는 !ㄴㅅ\n",
    "   설명: 오늘의 뉴스 요약을 볼 수 있어요.\n\n",
    "6️⃣ 뉴스 새로고침\n",
    "   명령어: !뉴스새로고침\n",
    "   설명: 뉴스를 새로 받아와요. (관리자 전용)\n\n",
    "7️⃣ 월간 출석 랭킹 확인하기\n",
    "   명령어: !순위\n",
    "   설명: 이 방의 월간 출석 랭킹을 확인할 수 있어요.\n\n",
    "8️⃣ 월간 출석 랭킹 재계산하기\n",
    "   명령어: !순위업데이트\n",
    "   설명: 이 방의 월간 출석 랭킹을 재계산해요.\n\n",
    "9️⃣ 문장 가르치기\n",
    "   명령어: !학습 [문장] / !학습확인\n",
    "   설명: 댕동이에게 문장을 가르치거나 확인해요.\n\n",
    "🔟 도움말 보기\n",
    "   명령어: !가이드\n",
    "   설명: 이 도움말을 다시 볼 수 있어요.\n\n",
    "즐거운 댕동이와의 대화 되세요! 🐶💖",
);
